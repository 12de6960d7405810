//! HTTP client for the SD Elements API.
//!
//! This module provides [`SdeClient`], the entry point for talking to an
//! SD Elements server. The client attaches the token header, builds absolute
//! URLs and turns non-2xx responses into [`SdeError::ApiRequestFailed`].
//! Every call is exactly one HTTP request; nothing is retried.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sdelements_core::client::SdeClient;
//! use sdelements_core::auth::SdeCredential;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Hosted instance
//! let client = SdeClient::new("your-token")?;
//!
//! // Self-hosted instance with a read timeout
//! let client = SdeClient::builder()
//!     .credential(SdeCredential::api_token("your-token"))
//!     .server_host("sde.example.com")
//!     .read_timeout(std::time::Duration::from_secs(30))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Serialize;
use url::Url;

use crate::auth::SdeCredential;
use crate::error::{SdeError, SdeResult};
use crate::request::{RequestMethod, RequestSpec};

/// Default SD Elements host.
pub const DEFAULT_SERVER_HOST: &str = "cd.sdelements.com";

/// Default URL scheme.
pub const DEFAULT_SCHEME: &str = "https";

/// The client for the SD Elements API.
///
/// Holds the token and server host; both are fixed at construction. The
/// client is cheaply cloneable and can be shared across threads, since no
/// call mutates it.
#[derive(Debug, Clone)]
pub struct SdeClient {
    pub(crate) http: HttpClient,
    pub(crate) credential: SdeCredential,
    pub(crate) server_host: String,
    pub(crate) scheme: String,
}

/// Builder for constructing an [`SdeClient`].
///
/// Use [`SdeClient::builder()`] to create a new builder.
#[derive(Debug, Default)]
pub struct SdeClientBuilder {
    credential: Option<SdeCredential>,
    server_host: Option<String>,
    scheme: Option<String>,
    http_client: Option<HttpClient>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl SdeClient {
    /// Create a client for the default host (`cd.sdelements.com`).
    pub fn new(api_token: impl Into<String>) -> SdeResult<Self> {
        Self::builder().api_token(api_token).build()
    }

    /// Create a new builder for configuring an `SdeClient`.
    pub fn builder() -> SdeClientBuilder {
        SdeClientBuilder::default()
    }

    /// Get the server host.
    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    /// Build a full URL for an API path.
    ///
    /// The path is appended as-is: no escaping and no slash normalization.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}://{}{}", self.scheme, self.server_host, path)
    }

    /// Headers carrying the API token.
    pub fn authorization_headers(&self) -> BTreeMap<String, String> {
        BTreeMap::from([("Authorization".to_string(), self.credential.header_value())])
    }

    /// JSON content negotiation headers plus [`Self::authorization_headers`].
    pub fn default_headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::from([
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ]);
        headers.extend(self.authorization_headers());
        headers
    }

    /// Assemble a request for `path` with the default headers.
    pub fn request_spec(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> RequestSpec {
        RequestSpec {
            url: self.build_url(path),
            method,
            headers: self.default_headers(),
            body,
        }
    }

    /// Send a GET request and return the parsed JSON body.
    pub async fn get(&self, path: &str) -> SdeResult<serde_json::Value> {
        self.make_request(self.request_spec(RequestMethod::Get, path, None))
            .await
    }

    /// Send a POST request with a JSON body and return the parsed JSON body.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> SdeResult<serde_json::Value> {
        let body = serde_json::to_value(body)?;
        self.make_request(self.request_spec(RequestMethod::Post, path, Some(body)))
            .await
    }

    /// Send a PUT request with a JSON body and return the parsed JSON body.
    pub async fn put<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> SdeResult<serde_json::Value> {
        let body = serde_json::to_value(body)?;
        self.make_request(self.request_spec(RequestMethod::Put, path, Some(body)))
            .await
    }

    /// Execute a request.
    ///
    /// Returns the response body parsed as JSON when the status is 2xx (an
    /// empty body parses as `null`). Any other status becomes
    /// [`SdeError::ApiRequestFailed`]. Transport failures surface as
    /// [`SdeError::Request`].
    ///
    /// # Tracing
    ///
    /// Emits a span named `sde::client::request` with fields `method` and `url`.
    #[tracing::instrument(
        name = "sde::client::request",
        skip(self, spec),
        fields(method = %spec.method, url = %spec.url)
    )]
    pub async fn make_request(&self, spec: RequestSpec) -> SdeResult<serde_json::Value> {
        tracing::debug!("sending request");

        let mut request = self.http.request(spec.method.into(), &spec.url);
        for (name, value) in &spec.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::check_response(response).await
    }

    /// The reason phrase from the status line. hyper only records it when it
    /// differs from the canonical phrase, so fall back to that.
    fn reason_phrase(response: &reqwest::Response) -> String {
        match response.extensions().get::<hyper::ext::ReasonPhrase>() {
            Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
            None => response
                .status()
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Parse a successful response, or capture a failed one.
    async fn check_response(response: reqwest::Response) -> SdeResult<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let reason = Self::reason_phrase(&response);
            let body = response.text().await?;

            tracing::warn!(status = status.as_u16(), "request failed");
            return Err(SdeError::api_request_failed(status.as_u16(), reason, body));
        }

        let text = response.text().await?;
        tracing::debug!(status = status.as_u16(), "request succeeded");

        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl SdeClientBuilder {
    /// Set the credential to use for authentication.
    ///
    /// **Required.** The builder never reads the environment; use
    /// [`SdeCredential::from_env`] explicitly if the token lives there.
    pub fn credential(mut self, credential: SdeCredential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Shorthand for `credential(SdeCredential::api_token(token))`.
    pub fn api_token(self, token: impl Into<String>) -> Self {
        self.credential(SdeCredential::api_token(token))
    }

    /// Set the server host, e.g. `sde.example.com` or `localhost:8080`.
    ///
    /// Defaults to [`DEFAULT_SERVER_HOST`].
    pub fn server_host(mut self, host: impl Into<String>) -> Self {
        self.server_host = Some(host.into());
        self
    }

    /// Set the URL scheme.
    ///
    /// Defaults to [`DEFAULT_SCHEME`]. Only local test servers need `http`.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Set a custom HTTP client.
    ///
    /// **Note:** If you provide a custom HTTP client, the timeouts set on
    /// this builder are ignored.
    pub fn http_client(mut self, client: HttpClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the connection timeout. Unset means the transport default.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the timeout for the whole request/response cycle.
    /// Unset means the transport default.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Build the `SdeClient`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No credential was provided
    /// - The scheme and host do not form a valid URL
    /// - The HTTP client cannot be constructed
    pub fn build(self) -> SdeResult<SdeClient> {
        let credential = self.credential.ok_or_else(|| {
            SdeError::MissingConfig(
                "credential is required. Set it via builder or SdeCredential::from_env().".into(),
            )
        })?;

        let server_host = self
            .server_host
            .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string());
        let scheme = self.scheme.unwrap_or_else(|| DEFAULT_SCHEME.to_string());

        let base = format!("{}://{}", scheme, server_host);
        Url::parse(&base).map_err(|e| SdeError::InvalidEndpoint(format!("{base}: {e}")))?;

        let http = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = HttpClient::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                if let Some(timeout) = self.read_timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(SdeClient {
            http,
            credential,
            server_host,
            scheme,
        })
    }
}
