//! HTTP fetch client

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::error::FetchError;
use crate::fetch::decode_body;
use crate::model::Value;
use crate::request::FetchRequest;

/// The HTTP client behind every fetch cycle.
///
/// Cheap to clone (uses `Arc` internally) and safe to share across tasks.
/// Performs exactly one GET per [`fetch`](Self::fetch) call: no caching,
/// no retries, no deduplication. Requests carry a
/// `Content-Type: application/json` header and no credentials.
///
/// # Example
///
/// ```ignore
/// use datascope_lib::FetchClient;
/// use datascope_lib::request::FetchRequest;
///
/// let client = FetchClient::new();
/// let request = FetchRequest::new("https://api.example.com/items", "data")
///     .param("limit", 10i64);
/// let dataset = client.fetch(&request).await?;
/// ```
#[derive(Clone)]
pub struct FetchClient {
    inner: Arc<FetchClientInner>,
}

struct FetchClientInner {
    http_client: Client,
    timeout: Option<Duration>,
}

impl FetchClient {
    /// Creates a client with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new builder for constructing a client.
    pub fn builder() -> FetchClientBuilder {
        FetchClientBuilder::new()
    }

    /// Performs one fetch: build the URL, issue the GET, decode the body.
    ///
    /// Returns the normalized dataset or the first pipeline failure. No
    /// partial data ever escapes a failed cycle.
    pub async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Value>, FetchError> {
        let url = request.url()?;
        log::debug!("GET {url}");

        let mut http_request = self
            .inner
            .http_client
            .get(&url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(timeout) = self.inner.timeout {
            http_request = http_request.timeout(timeout);
        }

        let response = http_request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_body(status, &body, request.selected_field())
    }
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a [`FetchClient`].
///
/// Everything is optional: by default requests run on a fresh
/// `reqwest::Client` with no timeout, matching the behavior of a plain
/// browser `fetch` call.
pub struct FetchClientBuilder {
    http_client: Option<Client>,
    timeout: Option<Duration>,
}

impl FetchClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            http_client: None,
            timeout: None,
        }
    }

    /// Sets a per-request timeout. No timeout is applied by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`FetchClient`].
    pub fn build(self) -> FetchClient {
        FetchClient {
            inner: Arc::new(FetchClientInner {
                http_client: self.http_client.unwrap_or_default(),
                timeout: self.timeout,
            }),
        }
    }
}

impl Default for FetchClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
