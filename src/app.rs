use std::path::PathBuf;

use eframe::egui::{self, CentralPanel, TopBottomPanel};

use crate::config::AppConfig;
use crate::data::{DatasetLoader, LoadOutcome};
use crate::state::{self, ActivePage, ChartEvent};
use crate::ui;

pub struct FilmScatter {
    pub state: state::AppState,
    pub config: AppConfig,
    /// Where "Save settings" writes
    config_path: PathBuf,
    /// In-flight load, if any
    loader: Option<DatasetLoader>,
}

impl FilmScatter {
    /// Build the app and start loading the configured dataset
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = Self::with_config(config, AppConfig::default_path());
        let path = app.config.dataset_path.clone();
        app.load_file(&cc.egui_ctx, path);
        app
    }

    pub fn with_config(config: AppConfig, config_path: PathBuf) -> Self {
        let mut state = state::AppState::new();
        config.apply_to(&mut state.view);
        state.ui.active_page = ActivePage::Chart(config.variant);
        Self {
            state,
            config,
            config_path,
            loader: None,
        }
    }

    /// Load a dataset on a worker thread; the chart appears once it resolves
    pub fn load_file(&mut self, ctx: &egui::Context, path: PathBuf) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.state.ui.set_status(format!("Loading {}...", name));
        self.state.ui.clear_error();

        let ctx = ctx.clone();
        self.loader = Some(DatasetLoader::spawn_with_notify(path, move || {
            ctx.request_repaint()
        }));
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_some()
    }

    fn poll_loader(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        if let Some(outcome) = loader.poll() {
            let path = loader.path().to_path_buf();
            self.loader = None;
            self.handle_outcome(path, outcome);
        }
    }

    /// Apply a finished load to the state
    pub fn handle_outcome(&mut self, path: PathBuf, outcome: LoadOutcome) {
        self.state.ui.clear_status();
        match outcome {
            LoadOutcome::Loaded(dataset) => {
                self.state.set_dataset(dataset);
                self.config.dataset_path = path;
            }
            LoadOutcome::Failed(e) => {
                log::warn!("{}: nothing to render from {}", e.title(), path.display());
                self.state.clear_data();
                self.state.ui.set_error(e.user_message());
            }
        }
    }

    /// Reset zoom on the visible chart
    pub fn reset_view(&mut self) {
        if let Some(variant) = self.state.ui.active_variant() {
            if let Some(session) = self.state.session_mut(variant) {
                session.dispatch(ChartEvent::ResetView);
            }
        }
    }

    pub fn save_settings(&mut self) {
        self.config.update_from(&self.state.view);
        if let Some(variant) = self.state.ui.active_variant() {
            self.config.variant = variant;
        }
        match self.config.save(&self.config_path) {
            Ok(()) => self.state.ui.set_status("Settings saved"),
            Err(e) => self.state.ui.set_error(e.user_message()),
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // shortcuts would fire while typing into a text field otherwise
        if ctx.wants_keyboard_input() {
            return;
        }
        let (reset, grid, legend, theme, help, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::G),
                i.key_pressed(egui::Key::L),
                i.key_pressed(egui::Key::T),
                i.key_pressed(egui::Key::H) || i.key_pressed(egui::Key::F1),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if reset {
            self.reset_view();
        }
        if grid {
            self.state.view.show_grid = !self.state.view.show_grid;
        }
        if legend {
            self.state.view.show_legend = !self.state.view.show_legend;
        }
        if theme {
            self.state.view.toggle_dark_mode();
        }
        if help {
            self.state.view.show_help = !self.state.view.show_help;
        }
        if escape {
            self.state.view.show_help = false;
        }
    }
}

impl eframe::App for FilmScatter {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::scope!("update");

        self.poll_loader();

        if self.state.view.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.handle_shortcuts(ctx);

        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::render_toolbar(self, ctx, ui);
        });

        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui::render_status_bar(self, ui);
        });

        CentralPanel::default().show(ctx, |ui| match self.state.ui.active_page {
            ActivePage::Chart(variant) => {
                if self.state.has_data() {
                    ui::render_chart(self, ui, variant);
                } else if !self.is_loading() {
                    ui.vertical_centered(|ui| {
                        if self.state.ui.has_error() {
                            ui.heading("Could not load the dataset");
                        } else {
                            ui.heading("No data loaded");
                        }
                        ui.label("Click 📂 or drag and drop a CSV file to get started");
                    });
                }
            }
            ActivePage::Gallery => ui::render_gallery(ui),
        });

        ui::render_help_dialog(self, ctx);

        profiling::finish_frame!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartFrame, ChartVariant};
    use crate::data::{Dataset, Film};
    use crate::error::DataLoadError;
    use crate::scale::ColorBucketId;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn dataset() -> Arc<Dataset> {
        Arc::new(Dataset::new(
            vec![Film::new("Moana", "Animation", "Ron Clements", 107.0, 248.75, 76.0)],
            Some(PathBuf::from("films.csv")),
        ))
    }

    fn app(dir: &TempDir) -> FilmScatter {
        FilmScatter::with_config(AppConfig::default(), dir.path().join("settings.json"))
    }

    #[test]
    fn test_config_applied_on_start() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            variant: ChartVariant::Classic,
            dark_mode: true,
            ..AppConfig::default()
        };
        let app = FilmScatter::with_config(config, dir.path().join("settings.json"));
        assert_eq!(app.state.ui.active_variant(), Some(ChartVariant::Classic));
        assert!(app.state.view.dark_mode);
        assert!(!app.is_loading());
    }

    #[test]
    fn test_loaded_outcome_sets_dataset() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.state.ui.set_status("Loading films.csv...");

        app.handle_outcome(PathBuf::from("films.csv"), LoadOutcome::Loaded(dataset()));
        assert!(app.state.has_data());
        assert_eq!(app.state.ui.status, None);
        assert_eq!(app.config.dataset_path, PathBuf::from("films.csv"));
        assert_eq!(app.state.current_file, Some(PathBuf::from("films.csv")));
    }

    #[test]
    fn test_failed_outcome_clears_chart() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_outcome(PathBuf::from("films.csv"), LoadOutcome::Loaded(dataset()));

        app.handle_outcome(
            PathBuf::from("films.xlsx"),
            LoadOutcome::Failed(DataLoadError::UnsupportedFormat {
                extension: "xlsx".to_string(),
            }),
        );
        assert!(!app.state.has_data());
        assert!(app.state.sessions.is_empty());
        assert_eq!(
            app.state.ui.error_message.as_deref(),
            Some("Unsupported file format: '.xlsx'")
        );
    }

    #[test]
    fn test_reset_view_keeps_selection() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_outcome(PathBuf::from("films.csv"), LoadOutcome::Loaded(dataset()));

        let session = app
            .state
            .session_or_setup(ChartVariant::Revenue, ChartFrame::new(800.0, 750.0))
            .unwrap();
        session.dispatch(ChartEvent::ToggleBucket(ColorBucketId(7)));
        session.dispatch(ChartEvent::ZoomAt {
            anchor_x: 400.0,
            factor: 3.0,
        });

        app.reset_view();
        let session = app.state.session_mut(ChartVariant::Revenue).unwrap();
        assert!(session.transform().is_identity());
        assert!(session.selection().contains(ColorBucketId(7)));
    }

    #[test]
    fn test_save_settings_writes_view() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.state.view.show_grid = false;
        app.state.ui.active_page = ActivePage::Chart(ChartVariant::Classic);

        app.save_settings();
        assert_eq!(app.state.ui.status.as_deref(), Some("Settings saved"));

        let saved = AppConfig::load(&dir.path().join("settings.json")).unwrap();
        assert!(!saved.show_grid);
        assert_eq!(saved.variant, ChartVariant::Classic);
    }
}
