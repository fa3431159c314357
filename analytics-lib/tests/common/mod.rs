//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

use analytics_lib::error::TransportError;
use analytics_lib::transport::HttpResponse;
use analytics_lib::transport::Transport;
use async_trait::async_trait;

/// A two-entry report feed in the shape the service returns.
pub const TWO_ROW_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:dxp="http://schemas.google.com/analytics/2009"
      xmlns:openSearch="http://a9.com/-/spec/opensearch/1.1/">
  <id>http://www.google.com/analytics/feeds/data?ids=ga:123</id>
  <title type="text">Google Analytics Data for Profile 123</title>
  <openSearch:totalResults>2</openSearch:totalResults>
  <dxp:aggregates>
    <dxp:metric confidenceInterval="0.0" name="ga:visits" type="integer" value="19"/>
  </dxp:aggregates>
  <entry>
    <id>http://www.google.com/analytics/feeds/data?ids=ga:123&amp;ga:source=google</id>
    <title type="text">ga:source=google</title>
    <dxp:dimension name="ga:source" value="google"/>
    <dxp:metric confidenceInterval="0.0" name="ga:visits" type="integer" value="12"/>
  </entry>
  <entry>
    <id>http://www.google.com/analytics/feeds/data?ids=ga:123&amp;ga:source=(direct)</id>
    <title type="text">ga:source=(direct)</title>
    <dxp:dimension name="ga:source" value="(direct)"/>
    <dxp:metric confidenceInterval="0.0" name="ga:visits" type="integer" value="7"/>
  </entry>
</feed>"#;

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub url: String,
    pub pairs: Vec<(String, String)>,
}

#[derive(Default)]
struct MockState {
    login_responses: Mutex<VecDeque<Result<HttpResponse, String>>>,
    get_responses: Mutex<VecDeque<HttpResponse>>,
    posts: Mutex<Vec<Recorded>>,
    gets: Mutex<Vec<Recorded>>,
}

/// In-memory transport returning canned responses in order.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<MockState>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_login(&self, response: HttpResponse) -> &Self {
        self.state.login_responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn push_login_failure(&self, message: &str) -> &Self {
        self.state
            .login_responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn push_get(&self, response: HttpResponse) -> &Self {
        self.state.get_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn posts(&self) -> Vec<Recorded> {
        self.state.posts.lock().unwrap().clone()
    }

    pub fn gets(&self) -> Vec<Recorded> {
        self.state.gets.lock().unwrap().clone()
    }
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        self.state.posts.lock().unwrap().push(Recorded {
            url: url.to_string(),
            pairs: owned(form),
        });

        // Suspend like a real request so concurrent logins interleave
        tokio::task::yield_now().await;

        match self.state.login_responses.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::other(message)),
            None => Ok(HttpResponse::new(500, "no login response queued")),
        }
    }

    async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        self.state.gets.lock().unwrap().push(Recorded {
            url: url.to_string(),
            pairs: owned(headers),
        });

        Ok(self
            .state
            .get_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| HttpResponse::new(500, "no report response queued")))
    }
}

pub fn auth_body(token: &str) -> HttpResponse {
    HttpResponse::new(200, format!("SID=sid\nLSID=lsid\nAuth={}\n", token))
}
