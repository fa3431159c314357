//! Main Session

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use log::warn;
use reqwest::Client;
use tokio::sync::OnceCell;

use crate::api::query::DataFeed;
use crate::auth::AuthToken;
use crate::auth::ClientLogin;
use crate::config::Endpoints;
use crate::error::AuthError;
use crate::error::Error;
use crate::error::HttpError;
use crate::feed::DataFeedParser;
use crate::feed::Handler;
use crate::feed::RowCollector;
use crate::model::Row;
use crate::transport::ReqwestTransport;
use crate::transport::Transport;

/// An authenticated connection to the reporting service.
///
/// The session logs in once and caches the token for the rest of its life.
/// It is cheap to clone (uses `Arc` internally); clones share the token.
///
/// # Example
///
/// ```ignore
/// use analytics_lib::Session;
/// use analytics_lib::api::query::DataFeed;
///
/// let session = Session::builder()
///     .source("my-company-reports-1.0")
///     .build();
///
/// session.login("user@example.com", "password123").await?;
///
/// let feed = DataFeed::new()
///     .profile(123)
///     .metrics(&["visits"])
///     .dimensions(&["source"]);
///
/// for row in session.rows(&feed).await? {
///     println!("{:?}", row);
/// }
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    source: String,
    endpoints: Endpoints,
    transport: Arc<dyn Transport>,
    token: OnceCell<AuthToken>,
}

impl Session {
    /// Creates a new builder for constructing a session.
    pub fn builder() -> SessionBuilder<Missing> {
        SessionBuilder::new()
    }

    /// Logs in and caches the token.
    ///
    /// Once a login has succeeded, later calls return the cached token
    /// without contacting the service, whatever credentials they pass.
    /// Concurrent callers wait for the login in flight instead of starting
    /// their own. A failed login leaves the session logged out, and the next
    /// waiting caller tries with its own credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthToken, AuthError> {
        if let Some(token) = self.inner.token.get() {
            debug!("reusing cached token");
            return Ok(token.clone());
        }

        let token = self
            .inner
            .token
            .get_or_try_init(|| async {
                ClientLogin::new(email, password, &self.inner.source)
                    .authenticate(self.inner.transport.as_ref(), &self.inner.endpoints)
                    .await
            })
            .await?;

        Ok(token.clone())
    }

    /// Returns the cached token, if logged in.
    pub fn token(&self) -> Option<AuthToken> {
        self.inner.token.get().cloned()
    }

    /// Retrieves a report and streams its rows to `handler`.
    ///
    /// Returns the number of rows delivered.
    pub async fn report<'h>(
        &self,
        feed: &DataFeed,
        handler: impl Into<Handler<'h>>,
    ) -> Result<usize, Error> {
        let token = self.token().ok_or(AuthError::NotLoggedIn)?;

        let response = feed
            .retrieve_from(&self.inner.endpoints.data_url, &token, self.inner.transport.as_ref())
            .await
            .map_err(HttpError::from)?;

        if !response.is_success() {
            warn!("report request failed with HTTP {}", response.status);
            return Err(HttpError::status(response.status, response.text()).into());
        }

        let count = DataFeedParser::new(response.body.as_slice()).parse(handler)?;
        debug!("report returned {} rows", count);
        Ok(count)
    }

    /// Retrieves a report and returns all of its rows.
    pub async fn rows(&self, feed: &DataFeed) -> Result<Vec<Row>, Error> {
        let mut collector = RowCollector::new();
        self.report(feed, &mut collector).await?;
        Ok(collector.into_rows())
    }

    /// Returns the client identifier sent with logins.
    pub fn source(&self) -> &str {
        &self.inner.source
    }

    /// Returns the endpoints in use.
    pub fn endpoints(&self) -> &Endpoints {
        &self.inner.endpoints
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`Session`].
///
/// # Required Fields
///
/// - `source` - Identifier of the calling application, sent with the login
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use analytics_lib::Session;
///
/// let session = Session::builder()
///     .source("my-company-reports-1.0")
///     .timeout(Duration::from_secs(30))
///     .build();
///
/// assert_eq!(session.source(), "my-company-reports-1.0");
/// ```
pub struct SessionBuilder<Source> {
    source: Source,
    endpoints: Endpoints,
    transport: Option<Arc<dyn Transport>>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl SessionBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            source: Missing,
            endpoints: Endpoints::default(),
            transport: None,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the client identifier sent with logins.
    pub fn source(self, source: impl Into<String>) -> SessionBuilder<Set<String>> {
        SessionBuilder {
            source: Set(source.into()),
            endpoints: self.endpoints,
            transport: self.transport,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for SessionBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SessionBuilder<S> {
    /// Sets the service endpoints.
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Sets a custom transport.
    ///
    /// When set, `timeout`, `connect_timeout` and `http_client` are ignored.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl SessionBuilder<Set<String>> {
    /// Builds the [`Session`].
    pub fn build(self) -> Session {
        let transport = self.transport.unwrap_or_else(|| {
            let http_client = self.http_client.unwrap_or_else(|| {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().unwrap_or_default()
            });

            let mut transport = ReqwestTransport::with_client(http_client);
            if let Some(timeout) = self.timeout {
                transport = transport.timeout(timeout);
            }
            Arc::new(transport)
        });

        Session {
            inner: Arc::new(SessionInner {
                source: self.source.0,
                endpoints: self.endpoints,
                transport,
                token: OnceCell::new(),
            }),
        }
    }
}
