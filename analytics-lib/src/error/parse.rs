//! Feed parse error types

use std::num::ParseIntError;

use quick_xml::events::attributes::AttrError;

/// Errors that abort a feed parse.
///
/// No partial result is returned; rows completed before the failure have
/// already been delivered to the handler.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The document is not well-formed XML.
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The stream ended while elements were still open.
    #[error("Feed ended with {open_elements} unclosed element(s)")]
    Truncated {
        /// Number of elements left open at end of input.
        open_elements: usize,
    },

    /// A property declared `type="integer"` carried a non-integer value.
    #[error("Invalid integer value {value:?} for {name}")]
    InvalidInteger {
        /// Service name of the property.
        name: String,
        /// The offending value.
        value: String,
        /// Underlying conversion error.
        #[source]
        source: ParseIntError,
    },
}

impl From<AttrError> for ParseError {
    fn from(err: AttrError) -> Self {
        Self::Xml(quick_xml::Error::from(err))
    }
}
