//! Streaming feed parser

use std::io::BufRead;

use log::trace;
use quick_xml::Reader;
use quick_xml::events::Event;

use super::Handler;
use super::RowHandler;
use super::state::RowParser;
use crate::error::ParseError;
use crate::model::Row;

/// Reads a report feed and yields one [`Row`] per `entry`.
///
/// The input is consumed incrementally through a [`BufRead`]; only the
/// entry being read is held in memory. A row is produced only once its
/// entry has closed, and parsing stops at the first error.
///
/// # Example
///
/// ```
/// use analytics_lib::feed::DataFeedParser;
/// use analytics_lib::feed::RowCollector;
///
/// let xml = r#"<feed xmlns:dxp="http://schemas.google.com/analytics/2009">
///   <entry>
///     <dxp:dimension name="ga:source" value="google"/>
///     <dxp:metric name="ga:visits" type="integer" value="12"/>
///   </entry>
/// </feed>"#;
///
/// let mut rows = RowCollector::new();
/// DataFeedParser::new(xml.as_bytes()).parse(&mut rows).unwrap();
///
/// assert_eq!(rows.rows()[0].get_str("source"), Some("google"));
/// assert_eq!(rows.rows()[0].get_integer("visits"), Some(12));
/// ```
pub struct DataFeedParser<R> {
    reader: Reader<R>,
    rows: RowParser,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> DataFeedParser<R> {
    /// Creates a parser over `input`.
    pub fn new(input: R) -> Self {
        Self {
            reader: Reader::from_reader(input),
            rows: RowParser::new(),
            buf: Vec::new(),
            done: false,
        }
    }

    /// Parses the whole feed, delivering rows to `handler`.
    ///
    /// `start_rows` is called before reading, `end_rows` after the last row
    /// of a successful parse. On error, rows completed before the failure
    /// have been delivered and `end_rows` is not called.
    ///
    /// Returns the number of rows delivered.
    pub fn parse<'h>(self, handler: impl Into<Handler<'h>>) -> Result<usize, ParseError> {
        handler.into().with_instance(|handler| self.drive(handler))
    }

    fn drive(mut self, handler: &mut dyn RowHandler) -> Result<usize, ParseError> {
        handler.start_rows();

        let mut count = 0;
        while let Some(row) = self.next_row()? {
            trace!("row {}: {:?}", count, row);
            handler.row(row);
            count += 1;
        }

        handler.end_rows();
        Ok(count)
    }

    /// Reads up to the end of the next entry.
    ///
    /// Returns `Ok(None)` at end of input, and after any error.
    pub fn next_row(&mut self) -> Result<Option<Row>, ParseError> {
        if self.done {
            return Ok(None);
        }

        let result = self.read_row();
        if !matches!(result, Ok(Some(_))) {
            self.done = true;
        }
        result
    }

    fn read_row(&mut self) -> Result<Option<Row>, ParseError> {
        loop {
            let row = match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(element) => {
                    self.rows.start_element(&element)?;
                    None
                }
                Event::Empty(element) => {
                    self.rows.start_element(&element)?;
                    self.rows.end_element()?
                }
                Event::End(_) => self.rows.end_element()?,
                Event::Eof => {
                    return match self.rows.open_elements() {
                        0 => Ok(None),
                        open_elements => Err(ParseError::Truncated { open_elements }),
                    };
                }
                _ => None,
            };
            self.buf.clear();

            if row.is_some() {
                return Ok(row);
            }
        }
    }
}

impl<R: BufRead> Iterator for DataFeedParser<R> {
    type Item = Result<Row, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row().transpose()
    }
}

/// Parses a feed from `input` into `handler`.
///
/// Shorthand for [`DataFeedParser::new`] followed by
/// [`DataFeedParser::parse`].
pub fn parse_feed<'h, R: BufRead>(
    input: R,
    handler: impl Into<Handler<'h>>,
) -> Result<usize, ParseError> {
    DataFeedParser::new(input).parse(handler)
}
