//! Contract error types for the setup form
//!
//! These errors are transport-agnostic. Each variant carries the message
//! extracted from the failing step.

/// Import message shown for documents that are not valid JSON
pub const INVALID_CONFIG_FILE: &str = "Invalid config file. Please provide a valid JSON file.";

/// Setup errors surfaced to the operator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// Import document is not valid structured data
    #[error("Invalid config file: {message}")]
    Parse {
        /// Parser error details
        message: String,
    },
    /// Secret store or configuration store call failed
    #[error("Remote store error: {message}")]
    RemoteStore {
        /// Message extracted from the remote payload
        message: String,
    },
    /// Setup completion, reload or redirect failed
    #[error("Setup finalization failed: {message}")]
    Lifecycle {
        /// Message extracted from the remote payload
        message: String,
    },
}

impl SetupError {
    /// Message for the form status line
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse { .. } => INVALID_CONFIG_FILE.to_string(),
            Self::RemoteStore { message } => format!("Save failed: {}", message),
            Self::Lifecycle { message } => format!(
                "Settings were saved, but the app could not be reloaded: {}",
                message
            ),
        }
    }
}
