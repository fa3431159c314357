//! Visits by traffic source for the last 30 days.
//!
//! Run with: cargo run --example visits_by_source
//!
//! Requires .env file with:
//! - GA_EMAIL
//! - GA_PASSWORD
//! - GA_PROFILE_ID

use std::env;

use analytics_lib::Session;
use analytics_lib::api::query::DataFeed;
use analytics_lib::api::query::Direction;
use analytics_lib::feed::RowHandler;
use analytics_lib::model::Row;
use chrono::Duration;
use chrono::Utc;

/// Prints each row as it is parsed, then the total.
#[derive(Default)]
struct Printer {
    total: i64,
}

impl RowHandler for Printer {
    fn start_rows(&mut self) {
        println!("{:<40} {:>10}", "source", "visits");
    }

    fn row(&mut self, row: Row) {
        let visits = row.get_integer("visits").unwrap_or(0);
        self.total += visits;
        println!("{:<40} {:>10}", row.get_str("source").unwrap_or("-"), visits);
    }

    fn end_rows(&mut self) {
        println!("{:<40} {:>10}", "total", self.total);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let email = env::var("GA_EMAIL").expect("GA_EMAIL not set");
    let password = env::var("GA_PASSWORD").expect("GA_PASSWORD not set");
    let profile = env::var("GA_PROFILE_ID").expect("GA_PROFILE_ID not set");

    let session = Session::builder().source("analytics-lib-example").build();

    println!("Logging in...\n");
    session.login(&email, &password).await?;

    let end = Utc::now().date_naive();
    let feed = DataFeed::new()
        .profile(&profile)
        .metrics(&["visits"])
        .dimensions(&["source"])
        .dates(end - Duration::days(30), end)
        .filters(|f| f.greater_than("visits", 0))
        .sort("visits", Direction::Desc)
        .max_results(25);

    println!("GET {}\n", feed.render_uri());

    let mut printer = Printer::default();
    session.report(&feed, &mut printer).await?;

    Ok(())
}
