//! Streaming report feed parsing.
//!
//! The report body is an Atom-style XML feed in which every `entry` element
//! is one row, and each row's values are `dimension`/`metric` child elements
//! carrying `name`, `value` and an optional `type` attribute.
//!
//! - [`DataFeedParser`] - Pull rows one at a time, or push them to a handler
//! - [`RowHandler`] - Lifecycle and per-row callbacks
//! - [`Handler`] - A handler instance or a handler factory

mod handler;
mod parser;
mod state;

pub use handler::Handler;
pub use handler::RowCollector;
pub use handler::RowFn;
pub use handler::RowHandler;
pub use parser::DataFeedParser;
pub use parser::parse_feed;
