//! Error types

mod auth;
mod http;
mod parse;
mod transport;

pub use auth::*;
pub use http::*;
pub use parse::*;
pub use transport::*;

/// Top-level error for session operations.
///
/// Each stage of a report (login, retrieval, parse) fails with its own
/// error family; none of them is retried or recovered internally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Login failed or no login has happened yet.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Report retrieval failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The report body could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
