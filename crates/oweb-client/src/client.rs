//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, RequestBuilder, StatusCode};
use url::Url;

use crate::api::{ChatApi, FilesApi, ModelsApi};
use crate::error::{Error, Result};
use crate::outcome::{HttpFailure, Outcome};

/// Service root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Open WebUI API client.
///
/// Cheap to clone; all clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use oweb_client::{Outcome, OwebClient};
///
/// # async fn example() -> oweb_client::Result<()> {
/// let client = OwebClient::builder()
///     .base_url("http://localhost:3000/api")
///     .api_key("sk-secret")
///     .build()?;
///
/// match client.models().list().await? {
///     Outcome::Success(models) => println!("{} models", models.data.len()),
///     Outcome::Failure(failure) => println!("HTTP {}", failure.status),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OwebClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests, always ending in `/`.
    pub(crate) base_url: Url,
    /// Bearer token sent with every request.
    pub(crate) api_key: String,
    /// Per-request timeout. `None` leaves reqwest's default in place.
    pub(crate) timeout: Option<Duration>,
}

impl std::fmt::Debug for OwebClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwebClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl OwebClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the configured request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.inner.timeout
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the files (knowledge documents) API.
    pub fn files(&self) -> FilesApi {
        FilesApi::new(self.clone())
    }

    /// Access the models API.
    pub fn models(&self) -> ModelsApi {
        ModelsApi::new(self.clone())
    }

    /// Access the chat completions API.
    pub fn chat(&self) -> ChatApi {
        ChatApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path relative to the base URL.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Start a request carrying only the bearer token.
    ///
    /// Multipart uploads go through here directly so reqwest can set the
    /// `multipart/form-data` content type itself.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        tracing::debug!(%method, %url, "sending request");

        let mut request = self
            .inner
            .http
            .request(method, url)
            .bearer_auth(&self.inner.api_key);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }
        Ok(request)
    }

    /// Start a request carrying the bearer token and a JSON content type.
    pub(crate) fn json_request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        Ok(self
            .request(method, path)?
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json")))
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Outcome<T>> {
        let response = self.json_request(Method::GET, path)?.send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<Outcome<T>>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let response = self
            .json_request(Method::POST, path)?
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a multipart POST request.
    pub(crate) async fn post_multipart<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Outcome<T>> {
        let response = self
            .request(Method::POST, path)?
            .multipart(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Turn a response into an outcome.
    ///
    /// Only `200 OK` counts as success. Anything else keeps its status and raw
    /// body so the caller can report it.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Outcome<T>> {
        let status = response.status();
        if status == StatusCode::OK {
            let bytes = response.bytes().await?;
            let value = serde_json::from_slice(&bytes)?;
            Ok(Outcome::Success(value))
        } else {
            let body = response.text().await?;
            tracing::warn!(status = status.as_u16(), "request was not successful");
            Ok(Outcome::Failure(HttpFailure {
                status: status.as_u16(),
                body,
            }))
        }
    }
}

/// Builder for creating an [`OwebClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: None,
        }
    }

    /// Set the service root (defaults to [`DEFAULT_BASE_URL`]).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key used as bearer token.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<OwebClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Config("api_key is required".to_string()))?;

        // Parse and normalize base URL so relative joins keep its path
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let user_agent = format!("oweb-client/{}", env!("CARGO_PKG_VERSION"));

        let http = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(OwebClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                api_key,
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
