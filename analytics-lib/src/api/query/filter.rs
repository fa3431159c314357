//! Filter expressions for report queries.

use std::fmt;

use crate::model::to_service;

/// A comparison operator in the service's filter syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `=@` (substring match)
    Contains,
    /// `!@`
    NotContains,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessOrEqual,
    /// `=~` (regular expression match)
    Matches,
    /// `!~`
    NotMatches,
}

impl Operator {
    /// Returns the operator as it appears in a filter expression.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equals => "==",
            Operator::NotEquals => "!=",
            Operator::Contains => "=@",
            Operator::NotContains => "!@",
            Operator::GreaterThan => ">",
            Operator::GreaterOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessOrEqual => "<=",
            Operator::Matches => "=~",
            Operator::NotMatches => "!~",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulates comparisons and renders them as one filter expression.
///
/// Clauses are joined with `;` (logical AND) in the order they were added.
/// Field names are symbolic and translated to service names. The builder is
/// consumed by [`build`](Self::build).
///
/// # Example
///
/// ```
/// use analytics_lib::api::query::FilterBuilder;
///
/// let expression = FilterBuilder::new()
///     .equals("baz", 4)
///     .contains("foo", "123")
///     .build();
///
/// assert_eq!(expression, "ga:baz==4;ga:foo=@123");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    clauses: Vec<String>,
}

impl FilterBuilder {
    /// Creates an empty filter builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `field <op> value`.
    pub fn compare(mut self, field: &str, op: Operator, value: impl fmt::Display) -> Self {
        self.clauses
            .push(format!("{}{}{}", to_service(field), op, value));
        self
    }

    /// Appends an equality clause: `field==value`.
    pub fn equals(self, field: &str, value: impl fmt::Display) -> Self {
        self.compare(field, Operator::Equals, value)
    }

    /// Appends a not-equal clause: `field!=value`.
    pub fn not_equals(self, field: &str, value: impl fmt::Display) -> Self {
        self.compare(field, Operator::NotEquals, value)
    }

    /// Appends a substring clause: `field=@value`.
    pub fn contains(self, field: &str, value: impl fmt::Display) -> Self {
        self.compare(field, Operator::Contains, value)
    }

    /// Appends a negated substring clause: `field!@value`.
    pub fn not_contains(self, field: &str, value: impl fmt::Display) -> Self {
        self.compare(field, Operator::NotContains, value)
    }

    /// Appends `field>value`.
    pub fn greater_than(self, field: &str, value: impl fmt::Display) -> Self {
        self.compare(field, Operator::GreaterThan, value)
    }

    /// Appends `field>=value`.
    pub fn greater_or_equal(self, field: &str, value: impl fmt::Display) -> Self {
        self.compare(field, Operator::GreaterOrEqual, value)
    }

    /// Appends `field<value`.
    pub fn less_than(self, field: &str, value: impl fmt::Display) -> Self {
        self.compare(field, Operator::LessThan, value)
    }

    /// Appends `field<=value`.
    pub fn less_or_equal(self, field: &str, value: impl fmt::Display) -> Self {
        self.compare(field, Operator::LessOrEqual, value)
    }

    /// Appends a regular expression clause: `field=~pattern`.
    pub fn matches(self, field: &str, pattern: impl fmt::Display) -> Self {
        self.compare(field, Operator::Matches, pattern)
    }

    /// Appends a negated regular expression clause: `field!~pattern`.
    pub fn not_matches(self, field: &str, pattern: impl fmt::Display) -> Self {
        self.compare(field, Operator::NotMatches, pattern)
    }

    /// Renders the accumulated clauses.
    pub fn build(self) -> String {
        self.clauses.join(";")
    }
}
