//! Conversion of a base URL plus a [`Route`] into a transport request.
//!
//! A [`RequestDescriptor`] owns the pair and produces a fresh
//! [`reqwest::Request`] on every [`build`](RequestDescriptor::build) call;
//! nothing is cached, so a descriptor can be held and rebuilt freely.

use crate::route::{ParameterEncoding, Route};
use crate::{Error, Result};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use url::Url;

/// A base URL paired with a [`Route`], convertible to a transport request.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use waypost::{RequestDescriptor, Route};
///
/// let base = Url::parse("https://api.example.com/")?;
/// let descriptor = RequestDescriptor::new(base, Route::get("users/42"));
///
/// assert_eq!(descriptor.url().as_str(), "https://api.example.com/users/42");
/// # Ok::<(), url::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// The base URL the route path is appended to.
    pub base_url: Url,

    /// The route being described.
    pub route: Route,
}

impl RequestDescriptor {
    /// Creates a descriptor from a base URL and a route.
    pub fn new(base_url: Url, route: Route) -> Self {
        Self { base_url, route }
    }

    /// Returns the full request URL, without query parameters.
    ///
    /// The route path is always appended to the base URL path: the base
    /// path gains a trailing `/` if it lacks one, a leading `/` on the
    /// route path is stripped, and the two are concatenated. A route path
    /// can therefore never reset the URL to the host root, and a doubled
    /// slash at the seam is collapsed. Slashes elsewhere are preserved
    /// as-is.
    pub fn url(&self) -> Url {
        let mut url = self.base_url.clone();
        let mut path = String::from(url.path());
        if !path.ends_with('/') {
            path.push('/');
        }
        path.push_str(self.route.path.trim_start_matches('/'));
        url.set_path(&path);
        url
    }

    /// Builds the transport request for this descriptor.
    ///
    /// Recomputed on every call. Route headers are copied onto the request
    /// header set with last-write-wins semantics, then parameters are
    /// encoded according to the route's [`ParameterEncoding`]: query
    /// parameters are appended as URL query pairs (non-string JSON values
    /// rendered as their compact JSON text), JSON parameters become the
    /// request body.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid header name or value,
    /// and passes through any error `reqwest` reports while assembling the
    /// request. No other validation happens here; an unroutable URL only
    /// fails once the request is executed.
    pub fn build(&self, http: &reqwest::Client) -> Result<reqwest::Request> {
        let mut url = self.url();

        if self.route.encoding == ParameterEncoding::Query {
            if let Some(params) = self.route.parameters.as_ref().filter(|p| !p.is_empty()) {
                let mut pairs = url.query_pairs_mut();
                for (key, value) in params {
                    pairs.append_pair(key, &query_value(value));
                }
            }
        }

        tracing::debug!(
            method = %self.route.method,
            url = %url,
            encoding = ?self.route.encoding,
            "Built transport request"
        );

        let mut request = http.request(self.route.method.clone(), url);

        request = request.headers(route_headers(&self.route.headers)?);

        if self.route.encoding == ParameterEncoding::Json {
            if let Some(params) = &self.route.parameters {
                request = request.json(params);
            }
        }

        Ok(request.build()?)
    }
}

/// Collects route headers into a header map, last write wins.
fn route_headers(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::try_from(name.as_str())
            .map_err(|e| Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_str())
            .map_err(|e| Error::Configuration(format!("Invalid header value: {}", e)))?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Renders a JSON value as a query string value.
///
/// Strings are used verbatim; everything else keeps its compact JSON text,
/// so `10` renders as `10` and `true` as `true`.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_path_join_appends_to_base() {
        let descriptor = RequestDescriptor::new(
            base("https://api.example.com/"),
            Route::get("users/42"),
        );
        assert_eq!(descriptor.url().as_str(), "https://api.example.com/users/42");
    }

    #[test]
    fn test_path_join_keeps_base_path() {
        let descriptor =
            RequestDescriptor::new(base("https://api.example.com/v1"), Route::get("users"));
        assert_eq!(descriptor.url().as_str(), "https://api.example.com/v1/users");
    }

    #[test]
    fn test_path_join_collapses_seam_slash() {
        let descriptor =
            RequestDescriptor::new(base("https://api.example.com/v1/"), Route::get("/users"));
        assert_eq!(descriptor.url().as_str(), "https://api.example.com/v1/users");
    }

    #[test]
    fn test_leading_slash_does_not_reset_to_root() {
        let descriptor =
            RequestDescriptor::new(base("https://api.example.com/v1"), Route::get("/users"));
        assert_eq!(descriptor.url().as_str(), "https://api.example.com/v1/users");
    }

    #[test]
    fn test_build_sets_method_and_headers() {
        let http = reqwest::Client::new();
        let route = Route::delete("sessions/7")
            .header("X-Request-Id", "abc")
            .header("X-Request-Id", "def")
            .header("Accept", "application/json");
        let descriptor = RequestDescriptor::new(base("https://api.example.com/"), route);

        let request = descriptor.build(&http).unwrap();

        assert_eq!(request.method(), &http::Method::DELETE);
        // Last write wins on duplicate names.
        assert_eq!(request.headers().get("x-request-id").unwrap(), "def");
        assert_eq!(request.headers().get("accept").unwrap(), "application/json");
    }

    #[test]
    fn test_build_rejects_invalid_header_name() {
        let http = reqwest::Client::new();
        let route = Route::get("users").header("bad header", "x");
        let descriptor = RequestDescriptor::new(base("https://api.example.com/"), route);

        match descriptor.build(&http) {
            Err(Error::Configuration(msg)) => assert!(msg.contains("header name")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_query_encoding_appends_pairs() {
        let http = reqwest::Client::new();
        let route = Route::get("search")
            .parameter("q", "rust http")
            .parameter("limit", 10);
        let descriptor = RequestDescriptor::new(base("https://api.example.com/"), route);

        let request = descriptor.build(&http).unwrap();
        let query = request.url().query().unwrap();

        assert!(query.contains("q=rust+http"));
        assert!(query.contains("limit=10"));
        assert!(request.body().is_none());
    }

    #[test]
    fn test_json_encoding_sets_body() {
        let http = reqwest::Client::new();
        let route = Route::post("users").parameter("name", "Alice");
        let descriptor = RequestDescriptor::new(base("https://api.example.com/"), route);

        let request = descriptor.build(&http).unwrap();

        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/json"
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(
            serde_json::from_slice::<Value>(body).unwrap(),
            json!({"name": "Alice"})
        );
        assert!(request.url().query().is_none());
    }

    #[test]
    fn test_url_ignores_parameters_and_encoding() {
        let query = RequestDescriptor::new(
            base("https://api.example.com/"),
            Route::get("users").parameter("page", 1),
        );
        let body = RequestDescriptor::new(
            base("https://api.example.com/"),
            Route::post("users").parameter("page", 1),
        );
        assert_eq!(query.url(), body.url());
    }
}
