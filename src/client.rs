//! HTTP client facade that executes routes and handles JSON responses.
//!
//! The [`Client`] type is the main entry point: it owns a configured
//! `reqwest` session (connection reuse, TLS, cookie policy), executes
//! [`Route`]s against a base URL, validates status codes against the
//! acceptable range, and layers JSON decoding and the validate-then-parse
//! protocol on top. Use [`ClientBuilder`] to configure and create clients.

use crate::{
    parse::{parse_validated, Parser},
    route::Route,
    Error, RequestDescriptor, Response, Result,
};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::ops::Range;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// The default acceptable status range: 200 inclusive to 400 exclusive.
pub const DEFAULT_ACCEPTABLE_STATUSES: Range<u16> = 200..400;

/// An HTTP client that executes declarative [`Route`]s.
///
/// The client is designed to be reused across requests: it holds the
/// connection pool, cookie store, default headers, and the acceptable
/// status range for its whole lifetime, and is cheap to clone. Every
/// request resolves exactly once with either a value or an error.
///
/// # Examples
///
/// ```no_run
/// use serde_json::Value;
/// use waypost::{Client, FnParser, Route};
///
/// # async fn example() -> Result<(), waypost::Error> {
/// let client = Client::builder()
///     .base_url("https://api.example.com")?
///     .default_header("User-Agent", "my-app/1.0")?
///     .build()?;
///
/// // Plain JSON
/// let response = client.send(&Route::get("users/42")).await?;
/// println!("JSON: {}", response.data);
///
/// // Validated and typed via a parser
/// let user_id = FnParser::new(
///     |json: &Value| json.get("id").map_or(false, Value::is_i64),
///     |json: &Value| json["id"].as_i64().unwrap_or_default(),
/// );
/// let response = client.send_with(&Route::get("users/42"), &user_id).await?;
/// println!("id = {}", response.data);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    default_headers: HeaderMap,
    acceptable_statuses: Range<u16>,
}

impl Client {
    /// Creates a new [`ClientBuilder`] for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Pairs a route with this client's base URL.
    ///
    /// Useful when the descriptor itself is the value you want to hold on
    /// to, e.g. to rebuild the same request later via
    /// [`RequestDescriptor::build`].
    pub fn descriptor(&self, route: &Route) -> RequestDescriptor {
        RequestDescriptor::new(self.inner.base_url.clone(), route.clone())
    }

    /// Executes a route against this client's base URL and decodes the
    /// response body into a JSON value.
    ///
    /// A status code outside the acceptable range is reported as
    /// [`Error::UnacceptableStatus`]; transport failures pass through as
    /// [`Error::Network`]. An empty response body decodes to
    /// `Value::Null` rather than an error.
    pub async fn send(&self, route: &Route) -> Result<Response<Value>> {
        self.execute(&self.descriptor(route)).await
    }

    /// Executes a route and runs the decoded JSON through `parser`.
    ///
    /// The parser's `parse` step only runs if its `is_valid` step accepts
    /// the JSON; otherwise the call fails with [`Error::Validation`].
    pub async fn send_with<P: Parser>(
        &self,
        route: &Route,
        parser: &P,
    ) -> Result<Response<P::Output>> {
        self.execute_with(&self.descriptor(route), parser).await
    }

    /// Executes a route and deserializes the decoded JSON into `T`.
    ///
    /// Deserialization failures are reported as [`Error::Decode`] with the
    /// raw body preserved.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use serde::Deserialize;
    /// use waypost::{Client, Route};
    ///
    /// #[derive(Deserialize)]
    /// struct User { id: u64, name: String }
    ///
    /// # async fn example() -> Result<(), waypost::Error> {
    /// # let client = Client::builder().base_url("https://api.example.com")?.build()?;
    /// let user = client.send_as::<User>(&Route::get("users/42")).await?;
    /// println!("{} (#{})", user.data.name, user.data.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_as<T: DeserializeOwned>(&self, route: &Route) -> Result<Response<T>> {
        let response = self.send(route).await?;
        let Response {
            data,
            raw_body,
            status,
            headers,
            latency,
        } = response;

        match serde_json::from_value::<T>(data) {
            Ok(data) => Ok(Response::new(data, raw_body, status, headers, latency)),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    raw_response = %raw_body,
                    "Failed to deserialize response"
                );
                Err(Error::Decode {
                    raw_response: raw_body,
                    serde_error: e.to_string(),
                    status,
                })
            }
        }
    }

    /// Executes an already-built request descriptor.
    ///
    /// Same behavior as [`Client::send`], for callers that hold a
    /// [`RequestDescriptor`] of their own; the descriptor's base URL wins
    /// over the client's.
    pub async fn execute(&self, descriptor: &RequestDescriptor) -> Result<Response<Value>> {
        let start = Instant::now();
        let mut request = descriptor.build(&self.inner.http_client)?;

        // Client defaults never override per-route headers.
        for (name, value) in &self.inner.default_headers {
            if !request.headers().contains_key(name) {
                request.headers_mut().insert(name.clone(), value.clone());
            }
        }

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            "Executing HTTP request"
        );

        let response = self.inner.http_client.execute(request).await?;
        let latency = start.elapsed();
        self.handle_response(response, latency).await
    }

    /// Executes an already-built descriptor and runs the decoded JSON
    /// through `parser`.
    pub async fn execute_with<P: Parser>(
        &self,
        descriptor: &RequestDescriptor,
        parser: &P,
    ) -> Result<Response<P::Output>> {
        let response = self.execute(descriptor).await?;
        let parsed = parse_validated(&response.data, parser)?;
        Ok(response.map(|_| parsed))
    }

    /// Validates the status and decodes the body into a JSON value.
    async fn handle_response(
        &self,
        response: reqwest::Response,
        latency: Duration,
    ) -> Result<Response<Value>> {
        let status = response.status();
        let headers = response.headers().clone();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            "Received HTTP response"
        );

        let raw_body = response.text().await?;

        if !self.inner.acceptable_statuses.contains(&status.as_u16()) {
            if status.is_client_error() {
                tracing::error!(
                    status = status.as_u16(),
                    response = %raw_body,
                    "Client error (4xx)"
                );
            } else if status.is_server_error() {
                tracing::warn!(
                    status = status.as_u16(),
                    response = %raw_body,
                    "Server error (5xx)"
                );
            }

            return Err(Error::UnacceptableStatus {
                status,
                raw_response: raw_body,
                headers,
            });
        }

        // Decode on the blocking pool so large bodies never occupy an
        // async worker; the result resolves back on the caller's task.
        let (raw_body, decoded) = tokio::task::spawn_blocking(move || {
            let decoded = decode_json(&raw_body);
            (raw_body, decoded)
        })
        .await
        .map_err(|e| Error::Decode {
            raw_response: String::new(),
            serde_error: format!("Decode task failed: {}", e),
            status,
        })?;

        match decoded {
            Ok(value) => Ok(Response::new(value, raw_body, status, headers, latency)),
            Err(serde_error) => {
                tracing::error!(
                    error = %serde_error,
                    raw_response = %raw_body,
                    "Failed to decode response body"
                );
                Err(Error::Decode {
                    raw_response: raw_body,
                    serde_error,
                    status,
                })
            }
        }
    }

    /// Sends a GET route for the given path.
    pub async fn get(&self, path: impl Into<String>) -> Result<Response<Value>> {
        self.send(&Route::get(path)).await
    }

    /// Sends a POST route with a JSON body for the given path.
    pub async fn post(
        &self,
        path: impl Into<String>,
        parameters: serde_json::Map<String, Value>,
    ) -> Result<Response<Value>> {
        self.send(&Route::post(path).parameters(parameters)).await
    }

    /// Sends a PUT route with a JSON body for the given path.
    pub async fn put(
        &self,
        path: impl Into<String>,
        parameters: serde_json::Map<String, Value>,
    ) -> Result<Response<Value>> {
        self.send(&Route::put(path).parameters(parameters)).await
    }

    /// Sends a DELETE route for the given path.
    pub async fn delete(&self, path: impl Into<String>) -> Result<Response<Value>> {
        self.send(&Route::delete(path)).await
    }
}

/// Decodes a raw body into a JSON value.
///
/// An empty or whitespace-only body is JSON null, not an error.
fn decode_json(raw: &str) -> std::result::Result<Value, String> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(raw).map_err(|e| e.to_string())
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use waypost::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), waypost::Error> {
/// let client = ClientBuilder::new()
///     .base_url("https://api.example.com")?
///     .default_header("User-Agent", "my-app/1.0")?
///     .acceptable_statuses(200..300)
///     .cookie_store(true)
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    default_headers: HeaderMap,
    acceptable_statuses: Range<u16>,
    timeout: Option<Duration>,
    cookie_store: bool,
    cookie_provider: Option<Arc<reqwest::cookie::Jar>>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: HeaderMap::new(),
            acceptable_statuses: DEFAULT_ACCEPTABLE_STATUSES,
            timeout: None,
            cookie_store: false,
            cookie_provider: None,
        }
    }

    /// Sets the base URL all route paths are appended to.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Adds a default header included in every request.
    ///
    /// Per-route headers take precedence over defaults with the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the status range treated as success, inclusive start and
    /// exclusive end. Defaults to `200..400`.
    pub fn acceptable_statuses(mut self, range: Range<u16>) -> Self {
        self.acceptable_statuses = range;
        self
    }

    /// Sets the session-wide request timeout.
    ///
    /// This is a pass-through default for the underlying session; without
    /// it, whatever `reqwest` applies by default is in effect.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables an in-process cookie jar for the session.
    pub fn cookie_store(mut self, enabled: bool) -> Self {
        self.cookie_store = enabled;
        self
    }

    /// Uses a caller-supplied cookie jar for the session.
    ///
    /// Takes precedence over [`ClientBuilder::cookie_store`]; sharing one
    /// jar across clients shares their cookies.
    pub fn cookie_provider(mut self, jar: Arc<reqwest::cookie::Jar>) -> Self {
        self.cookie_provider = Some(jar);
        self
    }

    /// Builds the configured [`Client`].
    ///
    /// # Errors
    ///
    /// Returns an error if no base URL was provided or the underlying
    /// session cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Configuration("Base URL is required".to_string()))?;

        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        if let Some(jar) = self.cookie_provider {
            http = http.cookie_provider(jar);
        } else if self.cookie_store {
            http = http.cookie_store(true);
        }
        let http_client = http
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                default_headers: self.default_headers,
                acceptable_statuses: self.acceptable_statuses,
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
    fn test_decode_empty_body_is_null() {
        assert_eq!(decode_json("").unwrap(), Value::Null);
        assert_eq!(decode_json("  \n\t").unwrap(), Value::Null);
    }

    #[test]
    fn test_decode_valid_json() {
        assert_eq!(
            decode_json(r#"{"id": 7}"#).unwrap(),
            serde_json::json!({"id": 7})
        );
    }

    #[test]
    fn test_decode_malformed_json_is_error() {
        assert!(decode_json("not json").is_err());
    }

    #[test]
    fn test_builder_requires_base_url() {
        match ClientBuilder::new().build() {
            Err(Error::Configuration(msg)) => assert!(msg.contains("Base URL")),
            other => panic!("Expected Configuration error, got {:?}", other.map(|_| ())),
        }
    }
}
