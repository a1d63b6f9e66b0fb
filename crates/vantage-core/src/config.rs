//! Client configuration.
//!
//! The API key is read from `ALPHA_VANTAGE_API_KEY` when loading from the
//! environment. An absent or empty key leaves requests unauthenticated; the
//! provider answers some endpoints without one.

use std::time::Duration;

/// Base URL for the Alpha Vantage API.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";
pub const BASE_URL_ENV: &str = "ALPHA_VANTAGE_BASE_URL";

/// Settings used to build a [`Client`](crate::Client) and its transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub user_agent: String,
    /// Overall request timeout applied by the transport. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            api_key: None,
            user_agent: format!("vantage/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load the API key and base URL override from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        config.api_key = non_empty(API_KEY_ENV);
        if let Some(base_url) = non_empty(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = (!api_key.is_empty()).then_some(api_key);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
