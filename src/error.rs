//! Error types for film-scatter
//!
//! Loading the dataset is the only operation that can fail at runtime; it
//! surfaces as a single [`DataLoadError`]. Settings-file problems are reported
//! separately and never stop the application.

use thiserror::Error;

/// Failure to load the film dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars could not read or parse the file
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Unsupported file format
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// The loader thread went away before reporting back
    #[error("Loader stopped before the dataset was read")]
    Disconnected,
}

/// Failure to read or write the settings file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    FileIo(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dataset loading
pub type Result<T> = std::result::Result<T, DataLoadError>;

/// UI-friendly error message formatting
impl DataLoadError {
    /// Get a user-friendly error message suitable for the status bar
    pub fn user_message(&self) -> String {
        match self {
            DataLoadError::FileIo(e) => format!("File error: {}", e),
            DataLoadError::Polars(e) => format!("Data error: {}", e),
            DataLoadError::UnsupportedFormat { extension } => {
                format!("Unsupported file format: '.{}'", extension)
            }
            DataLoadError::Disconnected => "Loading was interrupted".to_string(),
        }
    }

    /// Get a short title for the error
    pub fn title(&self) -> &'static str {
        match self {
            DataLoadError::FileIo(_) => "File Error",
            DataLoadError::Polars(_) => "Data Error",
            DataLoadError::UnsupportedFormat { .. } => "Unsupported Format",
            DataLoadError::Disconnected => "Load Error",
        }
    }
}

impl ConfigError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::FileIo(e) => format!("Config file error: {}", e),
            ConfigError::Json(e) => format!("Config error: {}", e),
        }
    }
}
