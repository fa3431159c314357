//! Immutable report query builder.

use std::fmt;

use chrono::NaiveDate;
use log::debug;

use super::Direction;
use super::FilterBuilder;
use crate::auth::AuthToken;
use crate::config::DATA_URL;
use crate::error::TransportError;
use crate::model::to_service;
use crate::transport::HttpResponse;
use crate::transport::Transport;

const IDS: &str = "ids";
const METRICS: &str = "metrics";
const DIMENSIONS: &str = "dimensions";
const START_DATE: &str = "start-date";
const END_DATE: &str = "end-date";
const START_INDEX: &str = "start-index";
const MAX_RESULTS: &str = "max-results";
const FILTERS: &str = "filters";
const SEGMENT: &str = "segment";
const SORT: &str = "sort";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A report query.
///
/// `DataFeed` is an immutable value: every setter borrows the receiver and
/// returns a new feed with one parameter added or overwritten. A feed can
/// therefore be used as a template and refined in several directions.
///
/// Metric, dimension, filter and sort names are symbolic (`visitor_type`)
/// and are translated to service names (`ga:visitorType`).
///
/// # Example
///
/// ```
/// use analytics_lib::api::query::DataFeed;
/// use analytics_lib::api::query::Direction;
///
/// let base = DataFeed::new()
///     .profile(123)
///     .metrics(&["visits", "pageviews"]);
///
/// let by_source = base
///     .dimensions(&["source"])
///     .sort("visits", Direction::Desc)
///     .filters(|f| f.greater_than("visits", 10));
///
/// assert_eq!(base.get("dimensions"), None);
/// assert_eq!(by_source.get("sort"), Some("-ga:visits"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataFeed {
    params: Vec<(&'static str, String)>,
}

impl DataFeed {
    /// Creates a query with no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this feed with `key` set to `value`.
    ///
    /// An existing value keeps its position in the query string.
    fn with(&self, key: &'static str, value: String) -> Self {
        let mut params = self.params.clone();
        match params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => params.push((key, value)),
        }
        Self { params }
    }

    /// Sets the profile (`ids`) the report is run against.
    pub fn profile(&self, id: impl fmt::Display) -> Self {
        self.with(IDS, to_service(&id.to_string()))
    }

    /// Sets the metrics, in the given order.
    pub fn metrics(&self, names: &[&str]) -> Self {
        self.with(METRICS, service_list(names))
    }

    /// Sets the dimensions, in the given order.
    pub fn dimensions(&self, names: &[&str]) -> Self {
        self.with(DIMENSIONS, service_list(names))
    }

    /// Sets the inclusive date range.
    pub fn dates(&self, start: NaiveDate, end: NaiveDate) -> Self {
        self.with(START_DATE, start.format(DATE_FORMAT).to_string())
            .with(END_DATE, end.format(DATE_FORMAT).to_string())
    }

    /// Sets the 1-based index of the first row returned.
    pub fn start_index(&self, n: u32) -> Self {
        self.with(START_INDEX, n.to_string())
    }

    /// Sets the maximum number of rows returned.
    pub fn max_results(&self, n: u32) -> Self {
        self.with(MAX_RESULTS, n.to_string())
    }

    /// Sets the filter expression built by `build`.
    ///
    /// # Example
    ///
    /// ```
    /// use analytics_lib::api::query::DataFeed;
    ///
    /// let feed = DataFeed::new().filters(|f| f.equals("baz", 4).contains("foo", "123"));
    /// assert_eq!(feed.get("filters"), Some("ga:baz==4;ga:foo=@123"));
    /// ```
    pub fn filters<F>(&self, build: F) -> Self
    where
        F: FnOnce(FilterBuilder) -> FilterBuilder,
    {
        self.with(FILTERS, build(FilterBuilder::new()).build())
    }

    /// Sets a dynamic segment built by `build`.
    ///
    /// The expression is rendered as `dynamic::<expression>`.
    pub fn segment<F>(&self, build: F) -> Self
    where
        F: FnOnce(FilterBuilder) -> FilterBuilder,
    {
        let expression = build(FilterBuilder::new()).build();
        self.with(SEGMENT, format!("dynamic::{}", expression))
    }

    /// Sets a stored segment by id, rendered as `gaid::<id>`.
    pub fn segment_id(&self, id: impl fmt::Display) -> Self {
        self.with(SEGMENT, format!("gaid::{}", id))
    }

    /// Sorts by a single column.
    pub fn sort(&self, column: &str, direction: Direction) -> Self {
        self.sort_by(&[(column, direction)])
    }

    /// Sorts by several columns, most significant first.
    pub fn sort_by(&self, columns: &[(&str, Direction)]) -> Self {
        let sort = columns
            .iter()
            .map(|(column, direction)| format!("{}{}", direction.prefix(), to_service(column)))
            .collect::<Vec<_>>()
            .join(",");
        self.with(SORT, sort)
    }

    /// Returns the value of a query parameter, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the query parameters in query string order.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Renders the request URI against the default report endpoint.
    pub fn render_uri(&self) -> String {
        self.uri_for(DATA_URL)
    }

    /// Renders the request URI against `base`.
    ///
    /// The query string is form-encoded, except that `@` is left literal
    /// because the service does not decode `%40` inside filter expressions.
    pub fn uri_for(&self, base: &str) -> String {
        if self.params.is_empty() {
            return base.to_string();
        }

        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
            .replace("%40", "@");

        format!("{}?{}", base, query)
    }

    /// Sends an authenticated GET for this report to the default endpoint.
    ///
    /// The response is returned as-is; its status is not interpreted here.
    pub async fn retrieve(
        &self,
        token: &AuthToken,
        transport: &dyn Transport,
    ) -> Result<HttpResponse, TransportError> {
        self.retrieve_from(DATA_URL, token, transport).await
    }

    /// Sends an authenticated GET for this report to `base`.
    pub async fn retrieve_from(
        &self,
        base: &str,
        token: &AuthToken,
        transport: &dyn Transport,
    ) -> Result<HttpResponse, TransportError> {
        let uri = self.uri_for(base);
        debug!("GET {}", uri);

        let authorization = token.authorization();
        transport
            .get(&uri, &[("Authorization", authorization.as_str())])
            .await
    }
}

fn service_list(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| to_service(name))
        .collect::<Vec<_>>()
        .join(",")
}
