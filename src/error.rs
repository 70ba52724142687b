//! Error types for route execution and response handling.
//!
//! The taxonomy is deliberately small: transport errors pass through from
//! `reqwest` unmodified, status codes outside the acceptable range become
//! validation failures, and JSON-shape rejections carry one fixed message.
//! Nothing is retried or recovered here; every error is forwarded to the
//! caller.

use http::{HeaderMap, StatusCode};

/// The main error type for route execution.
///
/// Errors that saw a response body preserve it raw, so callers can log or
/// inspect exactly what the server sent.
///
/// # Examples
///
/// ```no_run
/// use waypost::{Client, Error, Route};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder()
///     .base_url("https://api.example.com")?
///     .build()?;
///
/// match client.send(&Route::get("users/42")).await {
///     Ok(response) => println!("Got: {}", response.data),
///     Err(Error::UnacceptableStatus { status, raw_response, .. }) => {
///         eprintln!("Rejected status {}: {}", status, raw_response);
///     }
///     Err(Error::Decode { raw_response, serde_error, .. }) => {
///         eprintln!("Bad JSON ({}): {}", serde_error, raw_response);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A transport-level error (connection failed, DNS lookup failed, TLS
    /// handshake failed, etc.), passed through from `reqwest` unmodified.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response status code fell outside the acceptable range.
    ///
    /// The default range is `200..400`; anything outside it is reported as
    /// a validation failure rather than a successful response.
    #[error("Unacceptable status {status}: {raw_response}")]
    UnacceptableStatus {
        /// The HTTP status code.
        status: StatusCode,
        /// The raw response body.
        raw_response: String,
        /// The response headers.
        headers: HeaderMap,
    },

    /// The response JSON failed a [`Parser`](crate::Parser)'s shape check.
    ///
    /// Carries the fixed message and no structured detail; the parser that
    /// rejected the value is the place that knows why.
    #[error("Response JSON did not pass validation")]
    Validation,

    /// The response body was not decodable as the expected JSON.
    ///
    /// Produced for malformed (non-empty) bodies and for typed
    /// deserialization failures. An empty body is not an error; it
    /// decodes to JSON null.
    #[error("Failed to decode response (status {status}): {serde_error}")]
    Decode {
        /// The raw response body that failed to decode.
        raw_response: String,
        /// The serde error message.
        serde_error: String,
        /// The HTTP status code of the response.
        status: StatusCode,
    },

    /// Invalid configuration, such as a bad header name or a builder
    /// misuse.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code if this error has one.
    ///
    /// `Some(status)` for [`Error::UnacceptableStatus`] and
    /// [`Error::Decode`], `None` otherwise.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::UnacceptableStatus { status, .. } => Some(*status),
            Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    ///
    /// # Examples
    ///
    /// ```
    /// use http::StatusCode;
    /// use waypost::Error;
    ///
    /// let err = Error::UnacceptableStatus {
    ///     status: StatusCode::NOT_FOUND,
    ///     raw_response: "no such user".to_string(),
    ///     headers: http::HeaderMap::new(),
    /// };
    ///
    /// assert_eq!(err.raw_response(), Some("no such user"));
    /// assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    /// ```
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::UnacceptableStatus { raw_response, .. } => Some(raw_response),
            Error::Decode { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }
}

/// A specialized `Result` type for route execution.
pub type Result<T> = std::result::Result<T, Error>;
