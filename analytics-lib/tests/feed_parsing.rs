//! Streaming feed parser tests.

mod common;

use std::sync::Arc;
use std::sync::Mutex;

use analytics_lib::error::ParseError;
use analytics_lib::feed::DataFeedParser;
use analytics_lib::feed::Handler;
use analytics_lib::feed::RowCollector;
use analytics_lib::feed::RowFn;
use analytics_lib::feed::RowHandler;
use analytics_lib::feed::parse_feed;
use analytics_lib::model::Row;
use analytics_lib::model::Value;
use common::TWO_ROW_FEED;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Start,
    Row(Row),
    End,
}

/// Records every callback in order.
#[derive(Default)]
struct Recorder {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RowHandler for Recorder {
    fn start_rows(&mut self) {
        self.calls.lock().unwrap().push(Call::Start);
    }

    fn row(&mut self, row: Row) {
        self.calls.lock().unwrap().push(Call::Row(row));
    }

    fn end_rows(&mut self) {
        self.calls.lock().unwrap().push(Call::End);
    }
}

fn google_row() -> Row {
    Row::new().set("source", "google").set("visits", 12i64)
}

fn direct_row() -> Row {
    Row::new().set("source", "(direct)").set("visits", 7i64)
}

#[test]
fn test_rows_in_document_order() {
    let mut recorder = Recorder::default();
    let count = parse_feed(TWO_ROW_FEED.as_bytes(), &mut recorder).unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        *recorder.calls.lock().unwrap(),
        vec![
            Call::Start,
            Call::Row(google_row()),
            Call::Row(direct_row()),
            Call::End,
        ]
    );
}

#[test]
fn test_handler_factory_gets_fresh_instance() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let made = Arc::new(Mutex::new(0));

    for _ in 0..2 {
        let calls = Arc::clone(&calls);
        let made = Arc::clone(&made);
        let handler = Handler::factory(move || {
            *made.lock().unwrap() += 1;
            Recorder { calls }
        });
        parse_feed(TWO_ROW_FEED.as_bytes(), handler).unwrap();
    }

    assert_eq!(*made.lock().unwrap(), 2);
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 8);
    assert_eq!(calls.iter().filter(|c| **c == Call::Start).count(), 2);
    assert_eq!(calls.iter().filter(|c| **c == Call::End).count(), 2);
}

#[test]
fn test_default_hooks_are_no_ops() {
    struct Silent;
    impl RowHandler for Silent {}

    let count = parse_feed(TWO_ROW_FEED.as_bytes(), &mut Silent).unwrap();
    assert_eq!(count, 2);
}

#[test]
fn test_closure_handler() {
    let mut visits = 0;
    let mut handler = RowFn(|row: Row| visits += row.get_integer("visits").unwrap_or(0));
    parse_feed(TWO_ROW_FEED.as_bytes(), &mut handler).unwrap();
    drop(handler);

    assert_eq!(visits, 19);
}

#[test]
fn test_aggregates_are_not_rows() {
    let mut rows = RowCollector::new();
    parse_feed(TWO_ROW_FEED.as_bytes(), &mut rows).unwrap();

    assert!(rows.rows().iter().all(|row| row.len() == 2));
}

#[test]
fn test_unprefixed_elements_and_open_close_tags() {
    let xml = r#"<feed>
        <entry>
            <dimension name="ga:pagePath" value="/blog?a=1&amp;b=2"></dimension>
            <metric name="ga:timeOnSite" type="currency" value="12.5"></metric>
        </entry>
    </feed>"#;

    let mut rows = RowCollector::new();
    parse_feed(xml.as_bytes(), &mut rows).unwrap();

    let row = &rows.rows()[0];
    assert_eq!(row.get_str("page_path"), Some("/blog?a=1&b=2"));
    assert_eq!(row.get("time_on_site"), Some(&Value::from("12.5")));
}

#[test]
fn test_empty_feed() {
    let mut recorder = Recorder::default();
    let count = parse_feed("<feed></feed>".as_bytes(), &mut recorder).unwrap();

    assert_eq!(count, 0);
    assert_eq!(*recorder.calls.lock().unwrap(), vec![Call::Start, Call::End]);
}

#[test]
fn test_truncated_feed_stops_after_complete_rows() {
    let cut = TWO_ROW_FEED
        .rfind(r#"<dxp:metric confidenceInterval="0.0" name="ga:visits" type="integer" value="7"/>"#)
        .unwrap();
    let truncated = &TWO_ROW_FEED[..cut];

    let mut recorder = Recorder::default();
    let err = parse_feed(truncated.as_bytes(), &mut recorder).unwrap_err();

    // Open at the cut: the feed and the second entry
    assert!(matches!(err, ParseError::Truncated { open_elements: 2 }));
    assert_eq!(
        *recorder.calls.lock().unwrap(),
        vec![Call::Start, Call::Row(google_row())]
    );
}

#[test]
fn test_truncated_inside_tag() {
    let xml = r#"<feed><entry><dxp:metric name="ga:visits" val"#;

    let mut rows = RowCollector::new();
    assert!(parse_feed(xml.as_bytes(), &mut rows).is_err());
    assert!(rows.rows().is_empty());
}

#[test]
fn test_mismatched_tags() {
    let xml = "<feed><entry><dxp:metric name=\"ga:visits\" value=\"1\"></entry></feed>";

    let err = parse_feed(xml.as_bytes(), &mut RowCollector::new()).unwrap_err();
    assert!(matches!(err, ParseError::Xml(_)));
}

#[test]
fn test_non_integer_value_is_fatal() {
    let xml = r#"<feed>
        <entry><metric name="ga:visits" type="integer" value="3"/></entry>
        <entry><metric name="ga:visits" type="integer" value="n/a"/></entry>
        <entry><metric name="ga:visits" type="integer" value="5"/></entry>
    </feed>"#;

    let mut recorder = Recorder::default();
    let err = parse_feed(xml.as_bytes(), &mut recorder).unwrap_err();

    match err {
        ParseError::InvalidInteger { name, value, .. } => {
            assert_eq!(name, "ga:visits");
            assert_eq!(value, "n/a");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(
        *recorder.calls.lock().unwrap(),
        vec![Call::Start, Call::Row(Row::new().set("visits", 3i64))]
    );
}

#[test]
fn test_pull_iteration() {
    let rows: Vec<Row> = DataFeedParser::new(TWO_ROW_FEED.as_bytes())
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(rows, vec![google_row(), direct_row()]);
}

#[test]
fn test_iteration_stops_after_error() {
    let mut parser = DataFeedParser::new("<feed><entry></feed>".as_bytes());

    assert!(matches!(parser.next(), Some(Err(_))));
    assert!(parser.next().is_none());
}

#[test]
fn test_row_serializes_to_json() {
    let json = serde_json::to_value(google_row()).unwrap();
    assert_eq!(json, serde_json::json!({ "source": "google", "visits": 12 }));
}
