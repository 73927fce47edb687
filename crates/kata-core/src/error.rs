//! Error types for the session engine.
//!
//! Expected divergent outcomes (a wrong choice, a failed fix attempt)
//! are not errors; they resolve to failure [`crate::models::Outcome`]
//! values. Errors are reserved for caller bugs and configuration gaps.

use thiserror::Error;

/// Comprehensive error type for all session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Activity not found for the given ID
    #[error("Activity with ID '{id}' not found")]
    ActivityNotFound { id: String },

    /// Lesson not found in the catalog
    #[error("Lesson with ID '{id}' not found in catalog")]
    LessonNotFound { id: String },

    /// An activity is missing the payload its kind requires
    #[error("Activity '{activity_id}' is missing required payload: {expected}")]
    MissingPayload {
        activity_id: String,
        expected: &'static str,
    },

    /// The activity is already completed; attempts cannot be replayed
    #[error("Activity '{id}' is already completed")]
    ActivityCompleted { id: String },

    /// The chosen option does not exist on the activity
    #[error("Activity '{activity_id}' has no option '{option_id}'")]
    UnknownOption {
        activity_id: String,
        option_id: String,
    },

    /// The requested action does not apply to the activity's kind
    #[error("Action '{action}' is not valid for a {kind} activity")]
    UnsupportedAction {
        action: &'static str,
        kind: &'static str,
    },

    /// Catalog data violates a structural invariant
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl SessionError {
    /// Creates a catalog invariant violation error.
    pub fn catalog(message: impl Into<String>) -> Self {
        SessionError::Catalog {
            message: message.into(),
        }
    }
}

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
