//! The validate-then-parse contract for JSON responses.
//!
//! Consumers implement [`Parser`] once per response shape they care about:
//! [`is_valid`](Parser::is_valid) checks the shape, [`parse`](Parser::parse)
//! converts unconditionally. The composition lives in [`parse_validated`],
//! which guarantees `parse` is never invoked on JSON that failed its own
//! validation step and centralizes the validation-failure error, so
//! individual parsers never format that error themselves.

use crate::{Error, Result};
use serde_json::Value;

/// A per-endpoint capability that validates and converts response JSON.
///
/// `parse` is unconditional and infallible by contract: it is only ever
/// invoked, through [`parse_validated`], after `is_valid` returned
/// `true`, so it may lean on every shape guarantee `is_valid` checked.
///
/// # Examples
///
/// ```
/// use serde_json::{json, Value};
/// use waypost::{parse_validated, Parser};
///
/// struct UserId;
///
/// impl Parser for UserId {
///     type Output = i64;
///
///     fn is_valid(&self, json: &Value) -> bool {
///         json.get("id").map_or(false, Value::is_i64)
///     }
///
///     fn parse(&self, json: &Value) -> i64 {
///         json["id"].as_i64().unwrap_or_default()
///     }
/// }
///
/// assert_eq!(parse_validated(&json!({"id": 7}), &UserId).unwrap(), 7);
/// assert!(parse_validated(&json!({"name": "x"}), &UserId).is_err());
/// ```
pub trait Parser {
    /// The typed value this parser produces.
    type Output;

    /// Endpoint-specific shape check: required fields present, expected
    /// types in place.
    fn is_valid(&self, json: &Value) -> bool;

    /// Converts validated JSON into the typed value.
    fn parse(&self, json: &Value) -> Self::Output;
}

/// Runs `json` through `parser`, enforcing validate-before-parse.
///
/// Returns `Ok(parser.parse(json))` when `parser.is_valid(json)` holds;
/// otherwise returns [`Error::Validation`] without ever invoking `parse`.
pub fn parse_validated<P: Parser>(json: &Value, parser: &P) -> Result<P::Output> {
    if parser.is_valid(json) {
        Ok(parser.parse(json))
    } else {
        Err(Error::Validation)
    }
}

/// A [`Parser`] backed by a pair of closures.
///
/// Handy for endpoints that don't warrant a named parser type.
///
/// # Examples
///
/// ```
/// use serde_json::{json, Value};
/// use waypost::{parse_validated, FnParser};
///
/// let names = FnParser::new(
///     |json: &Value| json.is_array(),
///     |json: &Value| {
///         json.as_array()
///             .map(|items| items.iter().filter_map(Value::as_str).count())
///             .unwrap_or_default()
///     },
/// );
///
/// assert_eq!(parse_validated(&json!(["a", "b"]), &names).unwrap(), 2);
/// assert!(parse_validated(&json!({"not": "an array"}), &names).is_err());
/// ```
pub struct FnParser<V, P> {
    validate: V,
    parse: P,
}

impl<V, P, T> FnParser<V, P>
where
    V: Fn(&Value) -> bool,
    P: Fn(&Value) -> T,
{
    /// Creates a parser from a validation closure and a parse closure.
    pub fn new(validate: V, parse: P) -> Self {
        Self { validate, parse }
    }
}

impl<V, P, T> Parser for FnParser<V, P>
where
    V: Fn(&Value) -> bool,
    P: Fn(&Value) -> T,
{
    type Output = T;

    fn is_valid(&self, json: &Value) -> bool {
        (self.validate)(json)
    }

    fn parse(&self, json: &Value) -> T {
        (self.parse)(json)
    }
}
