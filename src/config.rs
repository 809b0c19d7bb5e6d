//! Configuration options for the equipment client

use std::time::Duration;

use equipamentos_transport::DEFAULT_BASE_URL;

/// Environment variable holding the collection URL
pub const ENV_API_URL: &str = "EQUIPAMENTOS_API_URL";

/// Environment variable holding the CSRF token
pub const ENV_CSRF_TOKEN: &str = "EQUIPAMENTOS_CSRF_TOKEN";

/// Configuration options for the equipment client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    /// Collection URL of the backend
    pub api_url: String,

    /// Token sent as `X-CSRFToken` on updates. `None` and empty both mean no header.
    pub csrf_token: Option<String>,

    /// Per-request timeout. `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            csrf_token: None,
            request_timeout: None,
        }
    }
}

impl ClientOptions {
    /// Read options from the environment (and a `.env` file, if any).
    /// Unset variables keep their defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut options = Self::default();
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                options.api_url = url;
            }
        }
        options.csrf_token = std::env::var(ENV_CSRF_TOKEN).ok();
        options
    }

    /// Set the collection URL
    pub fn with_api_url(mut self, value: &str) -> Self {
        self.api_url = value.to_string();
        self
    }

    /// Set the CSRF token
    pub fn with_csrf_token(mut self, value: Option<String>) -> Self {
        self.csrf_token = value;
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }
}
