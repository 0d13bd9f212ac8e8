//! Chat session error types

use thiserror::Error;

/// Errors that end a chat session
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Input closed while waiting for {participant}")]
    InputClosed { participant: String },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ChatError {
    /// Check if the session ended because input reached end-of-stream
    pub fn is_input_closed(&self) -> bool {
        matches!(self, ChatError::InputClosed { .. })
    }
}
