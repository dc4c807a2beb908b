//! Backend worker thread: runs catalog loads off the UI thread.

use std::{io, thread};

use catalog_core::load_catalog;
use chrono::Local;
use crossbeam_channel::{Receiver, Sender};
use shared::error::{CatalogError, ErrorCode};
use tracing::{debug, error};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

/// Spawns the worker. `repaint` is called after every event so the UI
/// wakes up even when no input arrives.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    repaint: impl Fn() + Send + 'static,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("catalog-backend".into())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!(error = %err, "failed to build backend runtime");
                    let _ = ui_tx.send(UiEvent::LoadFailed {
                        source: String::new(),
                        error: UiError::from_catalog_error(&CatalogError::new(
                            ErrorCode::Internal,
                            format!("failed to build backend runtime: {err}"),
                        )),
                    });
                    repaint();
                    return;
                }
            };

            while let Ok(cmd) = cmd_rx.recv() {
                debug!(command = cmd.name(), "backend command received");
                let event = runtime.block_on(handle_command(cmd));
                if ui_tx.send(event).is_err() {
                    break;
                }
                repaint();
            }
            debug!("backend command channel closed");
        })
}

async fn handle_command(cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::LoadCatalog { source } => {
            let label = source.to_string();
            let data_source = source.open();
            match load_catalog(data_source.as_ref()).await {
                Ok(records) => UiEvent::CatalogLoaded {
                    source: label,
                    records,
                    loaded_at: Local::now(),
                },
                Err(err) => UiEvent::LoadFailed {
                    source: label,
                    error: UiError::from_catalog_error(&err.to_catalog_error()),
                },
            }
        }
    }
}
