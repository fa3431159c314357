//! Sort direction for report queries.

/// Sort direction for a report column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the prefix the service expects before a sorted column.
    pub(crate) fn prefix(self) -> &'static str {
        match self {
            Direction::Asc => "",
            Direction::Desc => "-",
        }
    }
}
