//! Declarative descriptions of API endpoint calls.
//!
//! A [`Route`] captures everything that varies between calls to the same
//! API (method, path, parameters, encoding, extra headers) as a plain
//! immutable value. Routes carry no behavior of their own; they are turned
//! into transport requests by [`RequestDescriptor`](crate::RequestDescriptor)
//! or executed directly through a [`Client`](crate::Client).

use http::Method;
use serde_json::{Map, Value};

/// How a route's parameters are carried on the transport request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterEncoding {
    /// Parameters are appended to the request URL as query string pairs.
    #[default]
    Query,

    /// Parameters are serialized as a JSON request body.
    Json,
}

/// A declarative description of one API endpoint call.
///
/// A route is a pure data holder: construction never fails and performs no
/// validation. A malformed path or header surfaces later, when the
/// transport request is built.
///
/// The path is always interpreted relative to the client's base URL: it
/// is appended, never treated as an absolute override.
///
/// # Examples
///
/// ```
/// use waypost::{ParameterEncoding, Route};
///
/// let route = Route::get("users/42")
///     .parameter("expand", "profile")
///     .header("X-Request-Id", "abc123");
///
/// assert_eq!(route.path, "users/42");
/// assert_eq!(route.encoding, ParameterEncoding::Query);
///
/// let route = Route::post("users").parameter("name", "Alice");
/// assert_eq!(route.encoding, ParameterEncoding::Json);
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    /// The HTTP method (GET, POST, etc.).
    pub method: Method,

    /// How `parameters` are encoded onto the request.
    pub encoding: ParameterEncoding,

    /// The request path, relative to the base URL.
    pub path: String,

    /// Parameters for this call, if any.
    pub parameters: Option<Map<String, Value>>,

    /// Additional headers for this call.
    ///
    /// Stored as plain string pairs so route construction stays
    /// infallible; names and values are validated when the transport
    /// request is built, last write wins on duplicates.
    pub headers: Vec<(String, String)>,
}

impl Route {
    /// Creates a route with the given method and path.
    ///
    /// Defaults to [`ParameterEncoding::Query`]; use [`Route::encoding`]
    /// or one of the body-method constructors ([`Route::post`] etc.) for
    /// JSON-body encoding.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            encoding: ParameterEncoding::Query,
            path: path.into(),
            parameters: None,
            headers: Vec::new(),
        }
    }

    /// Creates a GET route with query-encoded parameters.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a POST route with JSON-body-encoded parameters.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path).encoding(ParameterEncoding::Json)
    }

    /// Creates a PUT route with JSON-body-encoded parameters.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path).encoding(ParameterEncoding::Json)
    }

    /// Creates a DELETE route with query-encoded parameters.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Creates a PATCH route with JSON-body-encoded parameters.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path).encoding(ParameterEncoding::Json)
    }

    /// Sets the parameter encoding.
    pub fn encoding(mut self, encoding: ParameterEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Adds a single parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypost::Route;
    ///
    /// let route = Route::get("search")
    ///     .parameter("q", "rust")
    ///     .parameter("limit", 10);
    /// ```
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds multiple parameters.
    pub fn parameters(mut self, params: impl IntoIterator<Item = (String, Value)>) -> Self {
        self.parameters.get_or_insert_with(Map::new).extend(params);
        self
    }

    /// Adds a header to the route.
    ///
    /// Unlike client-level default headers, route headers apply to this
    /// call only. Invalid names or values are not rejected here; they
    /// fail when the transport request is built.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new(Method::GET, "")
    }
}
