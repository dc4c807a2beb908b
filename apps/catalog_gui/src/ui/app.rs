use catalog_core::{CatalogSource, Settings, ViewStateEngine};
use chrono::{DateTime, Local};
use crossbeam_channel::{Receiver, Sender};
use shared::{
    domain::{Column, DisplayMode},
    view::CatalogView,
};
use tracing::info;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{self, UiAction};
use crate::ui::theme::{toggle_button_colors, visuals_for_mode};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub title: String,
    pub source: CatalogSource,
}

impl StartupConfig {
    /// Command-line values win over the resolved settings.
    pub fn resolve(settings: Settings, source: Option<String>, title: Option<String>) -> Self {
        let source = source.unwrap_or(settings.source);
        Self {
            title: title.unwrap_or(settings.title),
            source: CatalogSource::parse(&source),
        }
    }
}

enum LoadState {
    Loading,
    Loaded {
        source: String,
        loaded_at: DateTime<Local>,
    },
    Failed,
}

pub struct CatalogApp {
    ui_rx: Receiver<UiEvent>,

    title: String,
    engine: ViewStateEngine,
    filter_input: String,

    load_state: LoadState,
    status: String,
    status_banner: Option<UiError>,
    applied_mode: Option<DisplayMode>,
}

impl CatalogApp {
    pub fn new(
        startup: StartupConfig,
        cmd_tx: &Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        let mut status = format!("Loading catalog from {}", startup.source);
        dispatch_backend_command(
            cmd_tx,
            BackendCommand::LoadCatalog {
                source: startup.source,
            },
            &mut status,
        );

        Self {
            ui_rx,
            title: startup.title,
            engine: ViewStateEngine::default(),
            filter_input: String::new(),
            load_state: LoadState::Loading,
            status,
            status_banner: None,
            applied_mode: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::CatalogLoaded {
                    source,
                    records,
                    loaded_at,
                } => {
                    info!(source = %source, records = records.len(), "catalog ready");
                    self.status = format!("{} courses loaded", records.len());
                    self.engine.load_records(records);
                    self.load_state = LoadState::Loaded { source, loaded_at };
                    self.status_banner = None;
                }
                UiEvent::LoadFailed { source, error } => {
                    self.status = format!("Could not load {source}");
                    self.load_state = LoadState::Failed;
                    self.status_banner = Some(error);
                }
            }
        }
    }

    fn apply(&mut self, actions: Vec<UiAction>) {
        for action in actions {
            reducer::apply(&mut self.engine, action);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        let mode = self.engine.display_mode();
        if self.applied_mode == Some(mode) {
            return;
        }
        ctx.set_visuals(visuals_for_mode(mode));
        self.applied_mode = Some(mode);
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(error) = self.status_banner.clone() else {
            return;
        };

        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(150, 40, 40))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(error.banner_text()).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.status_banner = None;
                        }
                    });
                });
            });
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.vertical_centered(|ui| {
            ui.heading(&self.title);
            ui.add_space(8.0);

            let mode = self.engine.display_mode();
            let (fill, text) = toggle_button_colors(mode);
            let toggle = egui::Button::new(egui::RichText::new(mode.toggle_label()).color(text))
                .fill(fill)
                .corner_radius(5.0)
                .min_size(egui::vec2(180.0, 32.0));
            if ui.add(toggle).clicked() {
                actions.push(UiAction::ToggleDisplayMode);
            }
            ui.add_space(8.0);

            let search = egui::TextEdit::singleline(&mut self.filter_input)
                .hint_text("Search by title")
                .desired_width(360.0);
            if ui.add(search).changed() {
                actions.push(UiAction::FilterChanged(self.filter_input.clone()));
            }
        });
        ui.add_space(6.0);
    }

    fn show_status_line(&self, ui: &mut egui::Ui, view: &CatalogView<'_>) {
        ui.horizontal(|ui| {
            match &self.load_state {
                LoadState::Loading => {
                    ui.spinner();
                }
                LoadState::Loaded { source, loaded_at } => {
                    ui.small(format!("{source} · loaded {}", loaded_at.format("%H:%M:%S")));
                }
                LoadState::Failed => {}
            }
            ui.separator();
            ui.small(&self.status);
            if let Some(range) = view.range_label() {
                ui.separator();
                ui.small(range);
            }
        });
    }
}

fn show_table(ui: &mut egui::Ui, view: &CatalogView<'_>, actions: &mut Vec<UiAction>) {
    egui::ScrollArea::both()
        .id_salt("course_table_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("course_table")
                .num_columns(Column::ALL.len())
                .striped(true)
                .spacing(egui::vec2(18.0, 6.0))
                .show(ui, |ui| {
                    for header in view.headers() {
                        let label = egui::RichText::new(header.text()).strong();
                        let clicked = ui
                            .add(egui::Button::new(label).frame(false))
                            .on_hover_cursor(egui::CursorIcon::PointingHand)
                            .clicked();
                        if clicked {
                            actions.push(UiAction::HeaderClicked(header.column));
                        }
                    }
                    ui.end_row();

                    for record in &view.visible_rows {
                        for column in Column::ALL {
                            ui.label(record.cell(column));
                        }
                        ui.end_row();
                    }
                });
        });
}

fn show_pagination(ui: &mut egui::Ui, view: &CatalogView<'_>, actions: &mut Vec<UiAction>) {
    ui.horizontal_wrapped(|ui| {
        for button in view.page_buttons() {
            if ui
                .selectable_label(button.active, button.number.to_string())
                .clicked()
            {
                actions.push(UiAction::PageSelected(button.number));
            }
        }
    });
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("catalog_toolbar").show(ctx, |ui| {
            ui.add_space(8.0);
            self.show_status_banner(ui);
            self.show_toolbar(ui, &mut actions);
        });

        {
            let view = self.engine.compute_view();

            egui::TopBottomPanel::bottom("catalog_footer").show(ctx, |ui| {
                ui.add_space(4.0);
                show_pagination(ui, &view, &mut actions);
                self.show_status_line(ui, &view);
                ui.add_space(4.0);
            });

            egui::CentralPanel::default().show(ctx, |ui| {
                show_table(ui, &view, &mut actions);
            });
        }

        self.apply(actions);
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::domain::CourseRecord;

    use super::*;
    use crate::controller::events::UiErrorCategory;
    use shared::error::{CatalogError, ErrorCode};

    fn app() -> (CatalogApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(4);
        let startup = StartupConfig::resolve(
            Settings::default(),
            Some("fixtures/catalog.json".into()),
            None,
        );
        (CatalogApp::new(startup, &cmd_tx, ui_rx), cmd_rx, ui_tx)
    }

    #[test]
    fn startup_queues_a_single_catalog_load() {
        let (app, cmd_rx, _ui_tx) = app();
        assert_eq!(
            cmd_rx.try_recv().expect("load queued"),
            BackendCommand::LoadCatalog {
                source: CatalogSource::parse("fixtures/catalog.json"),
            }
        );
        assert!(cmd_rx.try_recv().is_err());
        assert_eq!(app.title, "RDS2.2");
        assert!(matches!(app.load_state, LoadState::Loading));
    }

    #[test]
    fn loaded_event_installs_records() {
        let (mut app, _cmd_rx, ui_tx) = app();
        ui_tx
            .send(UiEvent::CatalogLoaded {
                source: "fixtures/catalog.json".into(),
                records: vec![CourseRecord {
                    title: Some("Intro".into()),
                    ..CourseRecord::default()
                }],
                loaded_at: Local::now(),
            })
            .expect("send");

        app.process_ui_events();
        assert_eq!(app.engine.compute_view().filtered_count, 1);
        assert_eq!(app.status, "1 courses loaded");
        assert!(app.status_banner.is_none());
    }

    #[test]
    fn failed_event_keeps_catalog_empty_and_raises_banner() {
        let (mut app, _cmd_rx, ui_tx) = app();
        ui_tx
            .send(UiEvent::LoadFailed {
                source: "fixtures/catalog.json".into(),
                error: UiError::from_catalog_error(&CatalogError::new(
                    ErrorCode::NotFound,
                    "no such file",
                )),
            })
            .expect("send");

        app.process_ui_events();
        assert!(app.engine.compute_view().visible_rows.is_empty());
        assert_eq!(
            app.status_banner.as_ref().map(UiError::category),
            Some(UiErrorCategory::NotFound)
        );
        assert!(matches!(app.load_state, LoadState::Failed));
    }

    #[test]
    fn command_line_overrides_settings() {
        let startup = StartupConfig::resolve(
            Settings {
                source: "from_file.json".into(),
                title: "From File".into(),
            },
            None,
            Some("Fall Catalog".into()),
        );
        assert_eq!(startup.title, "Fall Catalog");
        assert_eq!(startup.source, CatalogSource::parse("from_file.json"));
    }
}
