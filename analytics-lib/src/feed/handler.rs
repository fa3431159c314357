//! Row handler protocol

use crate::model::Row;

/// Receives the rows of one parsed feed.
///
/// A parse calls [`start_rows`](Self::start_rows) once, then
/// [`row`](Self::row) once per feed entry in document order, then
/// [`end_rows`](Self::end_rows) once the stream is exhausted. Every method
/// has a no-op default.
///
/// # Example
///
/// ```
/// use analytics_lib::feed::RowHandler;
/// use analytics_lib::model::Row;
///
/// #[derive(Default)]
/// struct VisitCounter {
///     visits: i64,
/// }
///
/// impl RowHandler for VisitCounter {
///     fn row(&mut self, row: Row) {
///         self.visits += row.get_integer("visits").unwrap_or(0);
///     }
/// }
/// ```
pub trait RowHandler {
    /// Called before the first row.
    fn start_rows(&mut self) {}

    /// Called with each completed row.
    fn row(&mut self, _row: Row) {}

    /// Called after the last row of a successful parse.
    fn end_rows(&mut self) {}
}

/// The handler a parse delivers rows to.
///
/// A parse always drives a single handler instance: either one supplied by
/// the caller, or a fresh one produced by a factory for that parse.
pub enum Handler<'a> {
    /// A caller-owned handler.
    Instance(&'a mut dyn RowHandler),
    /// Builds a new handler for the parse.
    Factory(Box<dyn FnOnce() -> Box<dyn RowHandler + 'a> + 'a>),
}

impl<'a> Handler<'a> {
    /// Wraps a handler constructor.
    ///
    /// # Example
    ///
    /// ```
    /// use analytics_lib::feed::Handler;
    /// use analytics_lib::feed::RowCollector;
    ///
    /// let handler = Handler::factory(RowCollector::new);
    /// ```
    pub fn factory<F, H>(make: F) -> Self
    where
        F: FnOnce() -> H + 'a,
        H: RowHandler + 'a,
    {
        Handler::Factory(Box::new(move || Box::new(make()) as Box<dyn RowHandler + 'a>))
    }

    /// Runs `drive` against the resolved handler instance.
    pub(crate) fn with_instance<T>(self, drive: impl FnOnce(&mut dyn RowHandler) -> T) -> T {
        match self {
            Handler::Instance(handler) => drive(handler),
            Handler::Factory(make) => {
                let mut handler = make();
                drive(handler.as_mut())
            }
        }
    }
}

impl<'a, H: RowHandler> From<&'a mut H> for Handler<'a> {
    fn from(handler: &'a mut H) -> Self {
        Handler::Instance(handler)
    }
}

/// A handler that keeps every row.
#[derive(Debug, Clone, Default)]
pub struct RowCollector {
    rows: Vec<Row>,
}

impl RowCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rows collected so far.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the collector and returns its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl RowHandler for RowCollector {
    fn start_rows(&mut self) {
        self.rows.clear();
    }

    fn row(&mut self, row: Row) {
        self.rows.push(row);
    }
}

/// Adapts a closure into a handler that only receives rows.
///
/// # Example
///
/// ```
/// use analytics_lib::feed::RowFn;
/// use analytics_lib::feed::RowHandler;
/// use analytics_lib::model::Row;
///
/// let mut count = 0;
/// let mut handler = RowFn(|_row: Row| count += 1);
/// handler.row(Row::new());
/// drop(handler);
///
/// assert_eq!(count, 1);
/// ```
pub struct RowFn<F>(pub F);

impl<F: FnMut(Row)> RowHandler for RowFn<F> {
    fn row(&mut self, row: Row) {
        (self.0)(row)
    }
}
