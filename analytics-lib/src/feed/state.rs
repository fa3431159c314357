//! Entry/property state machine

use std::collections::HashMap;
use std::mem;

use log::debug;
use quick_xml::events::BytesStart;

use crate::error::ParseError;
use crate::model::Row;
use crate::model::Value;
use crate::model::to_symbolic;

const ENTRY: &[u8] = b"entry";
const DIMENSION: &[u8] = b"dimension";
const METRIC: &[u8] = b"metric";

const INTEGER_TYPE: &str = "integer";

/// Where the parser is relative to the current entry.
#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    InEntry {
        row: Row,
        depth: usize,
    },
    InEntryInProperty {
        row: Row,
        entry_depth: usize,
        property: Property,
        depth: usize,
    },
}

/// Turns element start/end events into completed rows.
///
/// Element names are matched by local name, so `dxp:metric` and `metric`
/// are the same. Elements other than `entry`, `dimension` and `metric` are
/// ignored, as are properties outside an entry. An element only closes the
/// entry or property it opened at the same nesting depth.
#[derive(Debug, Default)]
pub(crate) struct RowParser {
    state: State,
    depth: usize,
}

impl RowParser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of elements currently open.
    pub(crate) fn open_elements(&self) -> usize {
        self.depth
    }

    /// Handles an element start.
    pub(crate) fn start_element(&mut self, element: &BytesStart<'_>) -> Result<(), ParseError> {
        self.depth += 1;

        match element.local_name().as_ref() {
            ENTRY if matches!(self.state, State::Idle) => {
                self.state = State::InEntry {
                    row: Row::new(),
                    depth: self.depth,
                };
            }
            DIMENSION | METRIC if matches!(self.state, State::InEntry { .. }) => {
                let property = Property::from_element(element)?;
                if let State::InEntry { row, depth } = mem::take(&mut self.state) {
                    self.state = State::InEntryInProperty {
                        row,
                        entry_depth: depth,
                        property,
                        depth: self.depth,
                    };
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Handles an element end, returning the row if it closed an entry.
    pub(crate) fn end_element(&mut self) -> Result<Option<Row>, ParseError> {
        let closing = self.depth;
        self.depth = self.depth.saturating_sub(1);

        match mem::take(&mut self.state) {
            State::InEntryInProperty {
                mut row,
                entry_depth,
                property,
                depth,
            } if depth == closing => {
                if let Some((symbol, value)) = property.finish()? {
                    row.insert(symbol, value);
                }
                self.state = State::InEntry {
                    row,
                    depth: entry_depth,
                };
                Ok(None)
            }
            State::InEntry { row, depth } if depth == closing => Ok(Some(row)),
            other => {
                self.state = other;
                Ok(None)
            }
        }
    }
}

/// Attributes of one dimension or metric element.
#[derive(Debug, Default)]
struct Property {
    attributes: HashMap<String, String>,
}

impl Property {
    fn from_element(element: &BytesStart<'_>) -> Result<Self, ParseError> {
        let mut attributes = HashMap::new();
        for attribute in element.attributes() {
            let attribute = attribute?;
            let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            attributes.insert(key, value);
        }
        Ok(Self { attributes })
    }

    /// Converts the property into a symbolic name and typed value.
    ///
    /// Returns `None` for a property without a `name`.
    fn finish(mut self) -> Result<Option<(String, Value)>, ParseError> {
        let Some(name) = self.attributes.remove("name") else {
            debug!("skipping property without a name: {:?}", self.attributes);
            return Ok(None);
        };
        let raw = self.attributes.remove("value").unwrap_or_default();

        let value = if self.attributes.get("type").map(String::as_str) == Some(INTEGER_TYPE) {
            match raw.trim().parse::<i64>() {
                Ok(n) => Value::Integer(n),
                Err(source) => {
                    return Err(ParseError::InvalidInteger {
                        name,
                        value: raw,
                        source,
                    });
                }
            }
        } else {
            Value::String(raw)
        };

        Ok(Some((to_symbolic(&name), value)))
    }
}
