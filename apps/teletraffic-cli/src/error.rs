use teletraffic_core::TrafficError;
use thiserror::Error;

use crate::prompt::PromptError;

/// Failures that end a command with a non-zero exit status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load config: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Traffic(#[from] TrafficError),
    #[error("console error: {0}")]
    Prompt(#[from] PromptError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
