//! ClientLogin credential exchange

use log::debug;
use log::warn;

use super::AuthToken;
use crate::config::Endpoints;
use crate::error::AuthError;
use crate::transport::HttpResponse;
use crate::transport::Transport;

/// Name of the service the token is requested for.
const SERVICE: &str = "analytics";

/// A single email/password exchange for an auth token.
///
/// # Example
///
/// ```ignore
/// use analytics_lib::auth::ClientLogin;
/// use analytics_lib::config::Endpoints;
/// use analytics_lib::transport::ReqwestTransport;
///
/// let login = ClientLogin::new("user@example.com", "password123", "my-company-reports-1.0");
/// let token = login.authenticate(&ReqwestTransport::new(), &Endpoints::default()).await?;
/// ```
#[derive(Clone)]
pub struct ClientLogin {
    email: String,
    password: String,
    source: String,
}

impl ClientLogin {
    /// Creates a new login request.
    ///
    /// # Arguments
    ///
    /// * `email` - The account's email address
    /// * `password` - The account's password
    /// * `source` - Identifier of the calling application
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            source: source.into(),
        }
    }

    /// Posts the credentials and extracts the token from the response.
    pub async fn authenticate(
        &self,
        transport: &dyn Transport,
        endpoints: &Endpoints,
    ) -> Result<AuthToken, AuthError> {
        debug!("logging in as {} via {}", self.email, endpoints.login_url);

        let form = [
            ("Email", self.email.as_str()),
            ("Passwd", self.password.as_str()),
            ("accountType", endpoints.account_type.as_str()),
            ("service", SERVICE),
            ("source", self.source.as_str()),
        ];

        let response = transport.post_form(&endpoints.login_url, &form).await?;
        handle_response(&response)
    }
}

impl std::fmt::Debug for ClientLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientLogin")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("source", &self.source)
            .finish()
    }
}

/// Maps a login response to a token or an [`AuthError`].
fn handle_response(response: &HttpResponse) -> Result<AuthToken, AuthError> {
    let body = response.text();

    if response.is_success() {
        return body_value(&body, "Auth")
            .map(AuthToken::new)
            .ok_or(AuthError::MissingToken);
    }

    let code = body_value(&body, "Error");
    warn!(
        "login rejected with HTTP {} ({})",
        response.status,
        code.unwrap_or("no error code")
    );

    match code {
        Some("BadAuthentication") => Err(AuthError::InvalidCredentials),
        _ => Err(AuthError::Rejected {
            status: response.status,
            code: code.map(str::to_string),
        }),
    }
}

/// Finds the value of a `Key=value` line in a login response body.
fn body_value<'a>(body: &'a str, key: &str) -> Option<&'a str> {
    body.lines().find_map(|line| {
        line.trim_end()
            .strip_prefix(key)
            .and_then(|rest| rest.strip_prefix('='))
    })
}
