use thiserror::Error;

use crate::domain::{RejectionReason, SportEventStatus};

/// A single rejected input field, reported back to API callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Main error type for the sport events service
#[derive(Error, Debug)]
pub enum SportEventsError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Database errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    // Lookup errors
    #[error("No {resource} was found by {field} with value '{value}'")]
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    // State machine errors
    #[error("{reason}")]
    InvalidTransition {
        current: SportEventStatus,
        requested: Option<SportEventStatus>,
        reason: RejectionReason,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    // Validation errors
    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for SportEventsError
pub type Result<T> = std::result::Result<T, SportEventsError>;

impl SportEventsError {
    /// Missing sport event, keyed by its numeric id.
    pub fn event_not_found(id: i64) -> Self {
        SportEventsError::NotFound {
            resource: "Sport Event",
            field: "id",
            value: id.to_string(),
        }
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}
