//! Analytics reporting API client library
//!
//! A Rust async client for the Google Analytics Data Export API (v2.4):
//! log in, build report queries, and stream the returned feed into rows.
//!
//! - [`Session`] - Login and report retrieval
//! - [`api::query::DataFeed`] - Immutable report query builder
//! - [`feed`] - Streaming XML feed parser and row handlers
//! - [`model`] - Rows, values, and name translation

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod transport;

mod session;

pub use session::*;
