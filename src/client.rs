//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use url::Url;

use crate::api::{
    AuthApi, MemoryApi, MessageApi, PluginsApi, RabbitholeApi, SettingsApi, StatusApi, UsersApi,
};
use crate::error::{Error, Result};
use crate::ws::WsSession;

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default HTTP endpoint for a local Cheshire Cat instance.
const DEFAULT_BASE_URL: &str = "http://localhost:1865/";

/// Default WebSocket endpoint for a local Cheshire Cat instance.
const DEFAULT_WS_URL: &str = "ws://localhost:1865/ws";

/// Characters percent-encoded when interpolating an identifier into a path
/// segment. Matches the URL standard's path-segment set plus `%` itself.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// Cheshire Cat API client.
///
/// Provides typed access to the Cheshire Cat server endpoints. Each call
/// performs exactly one HTTP round-trip; failures map onto [`Error`] kinds
/// by status code and are never retried internally.
///
/// # Example
///
/// ```no_run
/// use cheshire_cat_client::CheshireCatClient;
///
/// # async fn example() -> cheshire_cat_client::Result<()> {
/// let client = CheshireCatClient::builder()
///     .base_url("http://localhost:1865")
///     .api_key("secret")
///     .build()?;
///
/// let status = client.status().get().await?;
/// assert_eq!(status.status().as_u16(), 200);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CheshireCatClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// WebSocket endpoint URL.
    pub(crate) ws_url: Url,
    /// Request timeout.
    pub(crate) timeout: Duration,
}

/// An HTTP response with its body fully read.
///
/// Bodies pass through undecoded; call [`Response::json`] to deserialize.
/// Ownership transfers to the caller, the client retains nothing.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// HTTP status code (always 2xx; non-2xx responses become errors).
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Response body as UTF-8 text (lossy).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::from)
    }
}

impl CheshireCatClient {
    /// Get access to the inner client state (for API implementations).
    pub(crate) fn inner(&self) -> &ClientInner {
        &self.inner
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client with default settings pointing to a local instance.
    pub fn localhost() -> Result<Self> {
        Self::builder().build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the WebSocket endpoint URL.
    pub fn ws_url(&self) -> &Url {
        &self.inner.ws_url
    }

    /// Open a WebSocket session against the configured endpoint.
    ///
    /// The session is an independent channel with its own lifecycle; it is
    /// not multiplexed through the HTTP client.
    pub async fn connect_ws(&self) -> Result<WsSession> {
        WsSession::connect(self.inner.ws_url.as_str()).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the status API.
    pub fn status(&self) -> StatusApi {
        StatusApi::new(self.clone())
    }

    /// Access the message API.
    pub fn message(&self) -> MessageApi {
        MessageApi::new(self.clone())
    }

    /// Access the auth API.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access the users API.
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Access the settings API.
    pub fn settings(&self) -> SettingsApi {
        SettingsApi::new(self.clone())
    }

    /// Access the memory API.
    pub fn memory(&self) -> MemoryApi {
        MemoryApi::new(self.clone())
    }

    /// Access the plugins API.
    pub fn plugins(&self) -> PluginsApi {
        PluginsApi::new(self.clone())
    }

    /// Access the rabbithole (file ingestion) API.
    pub fn rabbithole(&self) -> RabbitholeApi {
        RabbitholeApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Percent-encode an identifier for interpolation into a path segment.
    pub(crate) fn encode_segment(segment: &str) -> String {
        utf8_percent_encode(segment, PATH_SEGMENT).to_string()
    }

    /// Make a GET request.
    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path)?;
        self.execute(self.inner.http.get(url)).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<Q>(&self, path: &str, query: &Q) -> Result<Response>
    where
        Q: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.execute(self.inner.http.get(url).query(query)).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post_json<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.execute(self.inner.http.post(url).json(body)).await
    }

    /// Make a PUT request with a JSON body.
    pub(crate) async fn put_json<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.execute(self.inner.http.put(url).json(body)).await
    }

    /// Make a PUT request with no body.
    pub(crate) async fn put_empty(&self, path: &str) -> Result<Response> {
        let url = self.url(path)?;
        self.execute(self.inner.http.put(url)).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<Response> {
        let url = self.url(path)?;
        self.execute(self.inner.http.delete(url)).await
    }

    /// Make a POST request with a multipart form body.
    ///
    /// The multipart boundary content type replaces the default
    /// `application/json` header on these requests.
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Response> {
        let url = self.url(path)?;
        self.execute(self.inner.http.post(url).multipart(form)).await
    }

    /// Perform one round-trip and map the outcome.
    ///
    /// Transport-level failures (no HTTP response) become
    /// [`Error::Connection`]; any non-2xx status maps by code. The body is
    /// never inspected to decide success.
    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<Response> {
        let request = builder
            .timeout(self.inner.timeout)
            .build()
            .map_err(|source| Error::Connection { source })?;

        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self
            .inner
            .http
            .execute(request)
            .await
            .map_err(|source| Error::Connection { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::from_status(status));
        }

        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|source| Error::Connection { source })?
            .to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

/// Builder for creating a [`CheshireCatClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    ws_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            ws_url: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Create a builder from environment variables.
    ///
    /// Reads `CHESHIRE_CAT_BASE_URI`, `CHESHIRE_CAT_WS_BASE_URI` and
    /// `CHESHIRE_CAT_API_KEY`; unset variables fall back to the local
    /// development defaults.
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(url) = std::env::var("CHESHIRE_CAT_BASE_URI") {
            builder.base_url = Some(url);
        }
        if let Ok(url) = std::env::var("CHESHIRE_CAT_WS_BASE_URI") {
            builder.ws_url = Some(url);
        }
        if let Ok(key) = std::env::var("CHESHIRE_CAT_API_KEY") {
            builder.api_key = Some(key);
        }
        builder
    }

    /// Set the base URL for the server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the WebSocket endpoint URL.
    pub fn ws_url(mut self, url: impl Into<String>) -> Self {
        self.ws_url = Some(url.into());
        self
    }

    /// Set the API key sent as a bearer token on every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CheshireCatClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let ws_url = Url::parse(&self.ws_url.unwrap_or_else(|| DEFAULT_WS_URL.to_string()))?;

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = &self.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|_| Error::Config("Invalid API key".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        // Build HTTP client
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("cheshire-cat-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()
            .map_err(|source| Error::Connection { source })?;

        Ok(CheshireCatClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                ws_url,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_localhost() {
        let client = ClientBuilder::new().build().unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:1865/");
        assert_eq!(client.ws_url().as_str(), "ws://localhost:1865/ws");
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:1865")
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:1865/");
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = ClientBuilder::new().base_url("not a url").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:1865")
            .build()
            .unwrap();

        let url = client.url("users/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:1865/users/");

        let url = client.url("/users/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:1865/users/");

        // Root path resolves to the base URL itself.
        let url = client.url("/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:1865/");
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(CheshireCatClient::encode_segment("plain-id"), "plain-id");
        assert_eq!(CheshireCatClient::encode_segment("a b"), "a%20b");
        assert_eq!(CheshireCatClient::encode_segment("a/b"), "a%2Fb");
        assert_eq!(CheshireCatClient::encode_segment("a?b#c"), "a%3Fb%23c");
        assert_eq!(CheshireCatClient::encode_segment("100%"), "100%25");
    }
}
