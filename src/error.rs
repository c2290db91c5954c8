//! Error Types
//!
//! Centralized error handling for the interpreter and its callers.

use thiserror::Error;

/// Central error type
///
/// Unmatched transcripts are not errors: they come back as
/// [`crate::core::Interpretation::Unrecognized`]. Everything here points at a
/// defect in the integration or the environment.
#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("unsupported scale identifier: '{0}'")]
    InvalidScale(String),

    #[error("no such question: {0} (expected 1..=30)")]
    InvalidQuestion(u32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for interpreter operations
pub type VoiceResult<T> = Result<T, VoiceError>;
