use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::{commands::BackendCommand, runtime};
use catalog_core::load_settings;
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;
use ui::{CatalogApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Browse a course catalog loaded from a JSON file or URL")]
struct Args {
    /// Catalog location: a path or an http(s) URL.
    #[arg(long)]
    source: Option<String>,
    /// Heading shown above the table.
    #[arg(long)]
    title: Option<String>,
    /// Settings file (defaults to ./catalog.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = load_settings(args.config.as_deref());
    let startup = StartupConfig::resolve(settings, args.source, args.title);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(16);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(startup.title.clone())
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Course Catalog",
        options,
        Box::new(move |cc| {
            let repaint_ctx = cc.egui_ctx.clone();
            runtime::launch(cmd_rx, ui_tx, move || repaint_ctx.request_repaint())?;
            Ok(Box::new(CatalogApp::new(startup, &cmd_tx, ui_rx)))
        }),
    )
}
