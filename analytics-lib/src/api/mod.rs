//! Reporting API operations

pub mod query;
