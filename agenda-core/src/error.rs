//! Error types for the agenda calendar subsystem.

use thiserror::Error;

/// Errors that can occur in calendar operations.
///
/// None of these are fatal to the calendar: `Validation` keeps the draft
/// open for correction, `Fetch` keeps the previously displayed events in
/// place, `NotFound` closes stale modals and forces a re-fetch.
#[derive(Error, Debug)]
pub enum AgendaError {
    /// Client-detectable input error, attached to a specific draft field.
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// Transport or server failure. Retry is manual (re-navigate or resubmit).
    #[error("Request failed: {0}")]
    Fetch(String),

    /// The event no longer exists on the server (deleted elsewhere).
    #[error("Event not found: {0}")]
    NotFound(u64),
}

impl AgendaError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        AgendaError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
