//! Live tests against the reporting service.
//!
//! These tests require a real account and are ignored by default.
//! To run them, create a `.env` file in the analytics-lib directory with:
//!
//! ```env
//! GA_EMAIL=user@example.com
//! GA_PASSWORD=your-password
//! GA_PROFILE_ID=12345678
//! ```
//!
//! Then run: `cargo test -p analytics-lib -- --ignored`

use std::env;

use analytics_lib::Session;
use analytics_lib::api::query::DataFeed;
use analytics_lib::api::query::Direction;
use chrono::Duration;
use chrono::Utc;

fn load_env() -> Option<(String, String, String)> {
    let _ = dotenvy::dotenv();

    let email = env::var("GA_EMAIL").ok()?;
    let password = env::var("GA_PASSWORD").ok()?;
    let profile = env::var("GA_PROFILE_ID").ok()?;

    Some((email, password, profile))
}

#[tokio::test]
#[ignore = "requires real credentials in .env file"]
async fn test_visits_by_source() {
    let (email, password, profile) =
        load_env().expect("Missing required environment variables. See module docs.");

    let session = Session::builder().source("analytics-lib-live-test").build();
    session
        .login(&email, &password)
        .await
        .expect("Login failed");

    let end = Utc::now().date_naive();
    let feed = DataFeed::new()
        .profile(&profile)
        .metrics(&["visits"])
        .dimensions(&["source"])
        .dates(end - Duration::days(30), end)
        .sort("visits", Direction::Desc)
        .max_results(10);

    let rows = session.rows(&feed).await.expect("Report failed");

    assert!(rows.len() <= 10);
    for row in &rows {
        assert!(row.get_integer("visits").is_some());
        let fields: Vec<String> = row
            .iter()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect();
        println!("{}", fields.join(" "));
    }
}
