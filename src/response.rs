//! Response wrapper that preserves both parsed data and raw response details.
//!
//! The [`Response`] type wraps the decoded (or parsed) response data along
//! with metadata about the HTTP transaction, making it easy to access
//! timing information, headers, and the raw response body for debugging.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A wrapper around a successful HTTP response.
///
/// Carries the decoded data together with the status code, headers, raw
/// body, and request latency.
///
/// # Type Parameters
///
/// * `T` - The type of the decoded response data: `serde_json::Value` for
///   the plain JSON helpers, a [`Parser`](crate::Parser)'s output for the
///   validated helpers, or any `Deserialize` type for the typed helper.
///
/// # Examples
///
/// ```no_run
/// use waypost::{Client, Route};
///
/// # async fn example() -> Result<(), waypost::Error> {
/// let client = Client::builder()
///     .base_url("https://api.example.com")?
///     .build()?;
///
/// let response = client.send(&Route::get("users/42")).await?;
///
/// println!("JSON: {}", response.data);
/// println!("Status: {}", response.status);
/// println!("Request took {:?}", response.latency);
///
/// // Access the raw body for debugging
/// if response.latency > std::time::Duration::from_secs(1) {
///     println!("Slow response body: {}", response.raw_body);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The decoded response data.
    pub data: T,

    /// The raw response body as a string.
    ///
    /// Useful for debugging, logging, or when you need to inspect the
    /// exact bytes the server sent.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The time from sending the request to receiving the response.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    ///
    /// Typically called internally by the client after decoding a
    /// response body.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Maps the response data to a different type, preserving the metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// # use waypost::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     42,
    ///     "42".to_string(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(100),
    /// );
    ///
    /// let string_response = response.map(|n| n.to_string());
    /// assert_eq!(string_response.data, "42");
    /// assert_eq!(string_response.status, StatusCode::OK);
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        }
    }

    /// Returns a response header value by name, if present and valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// # use waypost::Response;
    /// # use http::{HeaderMap, HeaderValue, StatusCode};
    /// # use std::time::Duration;
    /// let mut headers = HeaderMap::new();
    /// headers.insert("content-type", HeaderValue::from_static("application/json"));
    ///
    /// let response = Response::new(
    ///     (),
    ///     String::new(),
    ///     StatusCode::OK,
    ///     headers,
    ///     Duration::from_millis(100),
    /// );
    ///
    /// assert_eq!(response.header("content-type"), Some("application/json"));
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
