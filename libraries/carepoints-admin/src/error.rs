//! Error types for the screen controllers.

use carepoints_core::FieldErrors;
use carepoints_server_client::ClientError;
use thiserror::Error;

/// Errors surfaced by controller operations.
///
/// `Validation` is handled entirely locally: the presentation annotates the
/// listed fields and nothing reaches the network or the notification
/// surface. `Client` failures have already been notified by the time the
/// controller returns them.
#[derive(Error, Debug)]
pub enum AdminError {
    /// Required-field validation failed; submission was blocked
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// A submission is already in flight for this dialog
    #[error("a submission is already in flight for this dialog")]
    SubmissionInFlight,

    /// An edit operation was requested with no record being edited
    #[error("no edit in progress")]
    NoEditInProgress,

    /// The remote call failed
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl AdminError {
    /// The per-field messages, when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AdminError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type for controller operations.
pub type Result<T> = std::result::Result<T, AdminError>;
