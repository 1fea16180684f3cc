//! Error types for the rw-app service layer.

use std::path::PathBuf;

/// Application error type shared by the CLI and library callers.
///
/// Engine failures keep their `SimError` unchanged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read scenario file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario file error: {0}")]
    Config(String),

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Scenario '{name}' failed: {source}")]
    ScenarioFailed {
        name: String,
        source: rw_sim::SimError,
    },

    #[error("Simulation error: {0}")]
    Simulation(#[from] rw_sim::SimError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rw-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Config(format!("YAML: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(format!("JSON: {}", err))
    }
}
