//! Service endpoint configuration

/// Default login endpoint.
pub const LOGIN_URL: &str = "https://www.google.com/accounts/ClientLogin";

/// Default report endpoint.
pub const DATA_URL: &str = "https://www.googleapis.com/analytics/v2.4/data";

/// Default account type sent with a login.
pub const ACCOUNT_TYPE: &str = "HOSTED_OR_GOOGLE";

/// Endpoints and fixed login parameters used by a [`Session`](crate::Session).
///
/// # Example
///
/// ```
/// use analytics_lib::config::Endpoints;
///
/// let endpoints = Endpoints::default()
///     .with_data_url("http://localhost:8080/data");
///
/// assert_eq!(endpoints.data_url, "http://localhost:8080/data");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// URL the credentials are posted to.
    ///
    /// Default: `https://www.google.com/accounts/ClientLogin`
    pub login_url: String,

    /// Base URL of the report feed.
    ///
    /// Default: `https://www.googleapis.com/analytics/v2.4/data`
    pub data_url: String,

    /// The `accountType` form field.
    ///
    /// Default: `HOSTED_OR_GOOGLE`
    pub account_type: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login_url: LOGIN_URL.to_string(),
            data_url: DATA_URL.to_string(),
            account_type: ACCOUNT_TYPE.to_string(),
        }
    }
}

impl Endpoints {
    /// Creates the default endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the login URL.
    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = url.into();
        self
    }

    /// Sets the report URL.
    pub fn with_data_url(mut self, url: impl Into<String>) -> Self {
        self.data_url = url.into();
        self
    }

    /// Sets the account type.
    pub fn with_account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = account_type.into();
        self
    }
}
