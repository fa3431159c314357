//! Session token

use std::fmt;

/// An opaque auth token returned by a successful login.
///
/// The token never expires from the client's point of view; it is obtained
/// once per [`Session`](crate::Session) and reused for every report.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token as an `Authorization` header value.
    pub fn authorization(&self) -> String {
        format!("GoogleLogin auth={}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&"[REDACTED]").finish()
    }
}
