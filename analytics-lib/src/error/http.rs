//! Report retrieval error types

use super::TransportError;

/// Errors that can occur while retrieving a report.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The service answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, lossily decoded.
        body: String,
    },

    /// The request could not be sent.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl HttpError {
    /// Creates a new status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code if this is a status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}
