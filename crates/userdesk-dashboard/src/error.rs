//! Error types surfaced by panel callbacks

use thiserror::Error;

/// Failure reported by a refresh handler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshError {
    #[error("refresh failed: {0}")]
    Failed(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

impl RefreshError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}
