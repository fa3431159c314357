//! Value enum for report fields

use std::fmt;

use serde::Serialize;

/// A single dimension or metric value from a report row.
///
/// Values are kept as the string the service sent, except when the feed
/// declared the property's type as `integer`.
///
/// # Example
///
/// ```
/// use analytics_lib::model::Value;
///
/// let source = Value::from("google");
/// let visits = Value::from(12i64);
///
/// assert_eq!(source.as_str(), Some("google"));
/// assert_eq!(visits.as_integer(), Some(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer value (`type="integer"` in the feed).
    Integer(i64),
    /// String value, exactly as received.
    String(String),
}

impl Value {
    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Integer(_) => None,
        }
    }

    /// Returns the integer value, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::String(_) => None,
        }
    }

}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
