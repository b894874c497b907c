//! Persistent settings
//!
//! Read from `film-scatter.json` in the working directory at start-up. A
//! missing or unreadable file is not fatal: defaults are used instead.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chart::ChartVariant;
use crate::constants::config::{CONFIG_FILE, DEFAULT_DATASET};
use crate::error::ConfigError;
use crate::state::ViewState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Dataset opened at start-up, relative to the working directory
    pub dataset_path: PathBuf,
    /// Chart shown first
    pub variant: ChartVariant,
    pub show_grid: bool,
    pub show_legend: bool,
    pub show_size_legend: bool,
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let view = ViewState::default();
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            variant: ChartVariant::default(),
            show_grid: view.show_grid,
            show_legend: view.show_legend,
            show_size_legend: view.show_size_legend,
            dark_mode: view.dark_mode,
        }
    }
}

impl AppConfig {
    /// Location of the settings file
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load from `path`, falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded settings from {}", path.display());
                config
            }
            Err(ConfigError::FileIo(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{}; using default settings", e.user_message());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        log::info!("saved settings to {}", path.display());
        Ok(())
    }

    /// Copy the display toggles into `view`
    pub fn apply_to(&self, view: &mut ViewState) {
        view.show_grid = self.show_grid;
        view.show_legend = self.show_legend;
        view.show_size_legend = self.show_size_legend;
        view.dark_mode = self.dark_mode;
    }

    /// Take the display toggles from `view`
    pub fn update_from(&mut self, view: &ViewState) {
        self.show_grid = view.show_grid;
        self.show_legend = view.show_legend;
        self.show_size_legend = view.show_size_legend;
        self.dark_mode = view.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = AppConfig {
            dataset_path: PathBuf::from("data/films.csv"),
            variant: ChartVariant::Classic,
            show_grid: false,
            dark_mode: true,
            ..AppConfig::default()
        };
        config.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "variant": "Classic" }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.variant, ChartVariant::Classic);
        assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET));
        assert!(config.show_legend);
    }

    #[test]
    fn test_broken_file_falls_back() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Json(_))));
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
        assert_eq!(
            AppConfig::load_or_default(&dir.path().join("missing.json")),
            AppConfig::default()
        );
    }

    #[test]
    fn test_view_round_trip() {
        let mut view = ViewState::default();
        let config = AppConfig {
            show_size_legend: false,
            dark_mode: true,
            ..AppConfig::default()
        };
        config.apply_to(&mut view);
        assert!(!view.show_size_legend);
        assert!(view.dark_mode);

        let mut other = AppConfig::default();
        other.update_from(&view);
        assert_eq!(other, config);
    }
}
