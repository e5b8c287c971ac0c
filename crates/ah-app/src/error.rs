//! Error types for the ah-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Preset error: {0}")]
    Preset(String),

    #[error("Failed to read preset file: {path}")]
    PresetFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write preset file: {path}")]
    PresetFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ah-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<ah_core::AhError> for AppError {
    fn from(err: ah_core::AhError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<ah_kinetics::KineticsError> for AppError {
    fn from(err: ah_kinetics::KineticsError) -> Self {
        match err {
            ah_kinetics::KineticsError::InvalidInput { what } => AppError::InvalidInput(what),
            ah_kinetics::KineticsError::Core(e) => AppError::InvalidInput(e.to_string()),
        }
    }
}

impl From<ah_results::ResultsError> for AppError {
    fn from(err: ah_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
