//! Transport error types

/// The transport could not complete an HTTP exchange.
///
/// This covers failures below HTTP status level: DNS, connection, TLS,
/// timeouts. A response with a non-2xx status is not a transport error.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Network error from the default `reqwest` transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Creates a transport error from a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
