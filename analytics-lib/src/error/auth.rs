//! Authentication error types

use super::TransportError;

/// Errors that can occur while logging in.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The service rejected the email/password pair.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The service rejected the login for another reason.
    #[error("Login rejected with HTTP {status}: {}", .code.as_deref().unwrap_or("no error code"))]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// The `Error=` value from the response body, if present.
        code: Option<String>,
    },

    /// The login succeeded but the response carried no `Auth=` line.
    #[error("Login response did not contain an auth token")]
    MissingToken,

    /// A report was requested before any successful login.
    #[error("Not logged in")]
    NotLoggedIn,

    /// The login request could not be sent.
    #[error("Transport error during login: {0}")]
    Transport(#[from] TransportError),
}
