//! Request building and dispatch.
//!
//! Every endpoint funnels into one of two dispatchers:
//!
//! - [`Client::get_json`] sends `Accept: application/json` and decodes the body
//!   with serde.
//! - [`Client::get_csv`] forces `datatype=csv`, checks the response for the
//!   provider's rate-limit signal, and yields a lazy [`Records`] sequence.
//!
//! Both issue exactly one GET and never retry.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::decode::{FromRow, Records};
use crate::http_client::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::{Error, Result};

const API_KEY_PARAM: &str = "apikey";
const REDACTED: &str = "***";

/// Query parameters, encoded with keys in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: BTreeMap<&'static str, String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.params.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn encode(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Alpha Vantage API client.
///
/// Holds no per-call state, so one value can serve concurrent calls. Cloning
/// is cheap: the transport is shared.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<dyn HttpClient>,
    api_key: Option<String>,
    base_url: String,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .finish_non_exhaustive()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::default()), "")
    }
}

impl Client {
    /// Client over an arbitrary transport. An empty key means no key.
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        Self {
            http_client,
            api_key: (!api_key.is_empty()).then_some(api_key),
            base_url: String::from(crate::config::DEFAULT_BASE_URL),
        }
    }

    /// Client over a reqwest transport built from `config`.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestHttpClient::from_config(&config)?;
        Ok(Self {
            http_client: Arc::new(transport),
            api_key: config.api_key.filter(|key| !key.is_empty()),
            base_url: config.base_url,
        })
    }

    /// Client configured from `ALPHA_VANTAGE_API_KEY` / `ALPHA_VANTAGE_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full request URL for `path` with the API key merged into `query`.
    fn url(&self, path: &str, mut query: Query) -> String {
        if let Some(api_key) = &self.api_key {
            query.set(API_KEY_PARAM, api_key.as_str());
        }

        let mut url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.encode());
        }
        url
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let shown = redact_api_key(&request.url);
        debug!(url = %shown, "dispatching alphavantage request");

        let response = self.http_client.execute(request).await?;
        debug!(
            status = response.status,
            content_type = response.content_type().unwrap_or(""),
            "alphavantage response received"
        );

        if !response.is_success() {
            return Err(Error::Status {
                url: shown,
                status: response.status,
            });
        }
        Ok(response)
    }

    /// GET `path` and decode the JSON body into `T`.
    pub(crate) async fn get_json<T>(&self, path: &str, query: Query) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request =
            HttpRequest::get(self.url(path, query)).with_header("Accept", "application/json");
        let response = self.send(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// GET `path` as CSV and return its records, header already read.
    pub(crate) async fn get_csv<T>(&self, path: &str, mut query: Query) -> Result<Records<T>>
    where
        T: FromRow,
    {
        query.set("datatype", "csv");
        let response = self.send(HttpRequest::get(self.url(path, query))).await?;

        if is_rate_limited(&response) {
            debug!("alphavantage answered a CSV request with JSON; treating as rate limit");
            return Err(Error::RateLimitExceeded);
        }

        Records::from_body(response.body)
    }

    /// GET `path` as CSV and hand each record to `consumer` in file order.
    ///
    /// An `Err` from `consumer` ends the call and is returned unchanged.
    pub(crate) async fn for_each_csv<T, F, E>(
        &self,
        path: &str,
        query: Query,
        mut consumer: F,
    ) -> std::result::Result<(), E>
    where
        T: FromRow,
        F: FnMut(T) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        let mut records = self.get_csv::<T>(path, query).await?;
        for record in records.by_ref() {
            consumer(record?)?;
        }
        trace!(records = records.decoded(), "csv response consumed");
        Ok(())
    }
}

/// The provider signals an exhausted quota on CSV endpoints by replying with a
/// JSON note instead of the table. Only the declared content type is checked.
pub fn is_rate_limited(response: &HttpResponse) -> bool {
    response
        .content_type()
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

/// Replaces the value of the `apikey` query parameter with `***`.
pub(crate) fn redact_api_key(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_owned();
    };

    let query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((API_KEY_PARAM, _)) => format!("{API_KEY_PARAM}={REDACTED}"),
            _ => pair.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{base}?{query}")
}
