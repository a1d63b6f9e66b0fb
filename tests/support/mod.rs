//! Shared test doubles for the integration suites.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use vantage_core::{Client, HttpClient, HttpError, HttpRequest, HttpResponse};

/// Transport double that replays canned responses in order and records every
/// request it receives.
#[derive(Default)]
pub struct RecordingHttpClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(self, response: HttpResponse) -> Self {
        self.push(Ok(response));
        self
    }

    pub fn fail_with(self, error: HttpError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, outcome: Result<HttpResponse, HttpError>) {
        self.responses
            .lock()
            .expect("responses lock poisoned")
            .push_back(outcome);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock poisoned").len()
    }

    /// URL of the only request sent.
    pub fn single_url(&self) -> String {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].url.clone()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request);
        let outcome = self
            .responses
            .lock()
            .expect("responses lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::new("no canned response left")));
        Box::pin(async move { outcome })
    }
}

/// Client with API key `demo` over a transport that answers once with `response`.
pub fn client_answering(response: HttpResponse) -> (Client, Arc<RecordingHttpClient>) {
    let transport = Arc::new(RecordingHttpClient::new().respond_with(response));
    let client = Client::new(transport.clone(), "demo");
    (client, transport)
}

/// Value of `key` in the query string of `url`, still percent-encoded.
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value.to_owned())
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
