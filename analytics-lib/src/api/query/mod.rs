//! Report query builders.
//!
//! - [`DataFeed`] - Immutable report query, rendered to a request URI
//! - [`FilterBuilder`] - Filter and segment expressions
//! - [`Direction`] - Sort direction

mod feed;
mod filter;
mod order;

pub use feed::DataFeed;
pub use filter::FilterBuilder;
pub use filter::Operator;
pub use order::Direction;
