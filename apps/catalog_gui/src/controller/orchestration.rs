//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker is not running; the catalog cannot be loaded".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::CatalogSource;
    use crossbeam_channel::bounded;

    use super::*;

    fn load_cmd() -> BackendCommand {
        BackendCommand::LoadCatalog {
            source: CatalogSource::parse("data/course_data.json"),
        }
    }

    #[test]
    fn queues_command_without_touching_status() {
        let (tx, rx) = bounded(1);
        let mut status = "Loading".to_string();
        dispatch_backend_command(&tx, load_cmd(), &mut status);

        assert_eq!(status, "Loading");
        assert_eq!(rx.try_recv().expect("queued"), load_cmd());
    }

    #[test]
    fn reports_full_and_disconnected_queues() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();
        dispatch_backend_command(&tx, load_cmd(), &mut status);
        dispatch_backend_command(&tx, load_cmd(), &mut status);
        assert!(status.contains("queue is full"));

        drop(rx);
        dispatch_backend_command(&tx, load_cmd(), &mut status);
        assert!(status.contains("not running"));
    }
}
