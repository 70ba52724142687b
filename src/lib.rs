//! # Waypost - declarative routes for HTTP APIs
//!
//! Waypost is a small convenience layer over `reqwest` and `serde_json`:
//! you describe an API endpoint declaratively as a [`Route`] (method, path,
//! parameters, encoding, headers), and the library turns that description
//! into a network request, then parses the JSON response into typed values
//! through a validate-then-parse protocol.
//!
//! There is deliberately no transport machinery here: connection pooling,
//! TLS, cookies, and JSON parsing all belong to the underlying libraries.
//!
//! ## Quick Start
//!
//! ```no_run
//! use serde_json::Value;
//! use waypost::{Client, FnParser, Route};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), waypost::Error> {
//!     let client = Client::builder()
//!         .base_url("https://api.example.com")?
//!         .default_header("User-Agent", "my-app/1.0")?
//!         .build()?;
//!
//!     // Declare the call, then run it
//!     let route = Route::get("users/42").parameter("expand", "profile");
//!     let response = client.send(&route).await?;
//!     println!("JSON: {}", response.data);
//!
//!     // Validate-then-parse into a typed value
//!     let id = FnParser::new(
//!         |json: &Value| json.get("id").map_or(false, Value::is_i64),
//!         |json: &Value| json["id"].as_i64().unwrap_or_default(),
//!     );
//!     let user_id = client.send_with(&route, &id).await?;
//!     println!("id = {} (status {})", user_id.data, user_id.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Declarative routes** - One immutable value per endpoint call, with
//!   query-string or JSON-body parameter encoding
//! - **Validate-then-parse** - Per-endpoint [`Parser`]s whose shape check
//!   always gates their conversion step
//! - **Status validation** - Responses outside the acceptable range
//!   (default `200..400`) are reported as validation errors, not successes
//! - **Raw response preservation** - Decode and status errors carry the
//!   exact body the server sent
//! - **Structured logging** - Request and response events via `tracing`
//! - **Connection reuse** - One cheap-to-clone client per API, owning its
//!   session, default headers, and cookie policy
//!
//! ## Error Handling
//!
//! Every request resolves exactly once with either a value or an error;
//! nothing is retried or recovered inside this layer:
//!
//! ```no_run
//! use waypost::{Client, Error, Route};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::builder().base_url("https://api.example.com")?.build()?;
//! match client.send(&Route::get("users/42")).await {
//!     Ok(response) => println!("{}", response.data),
//!     Err(Error::UnacceptableStatus { status, raw_response, .. }) => {
//!         eprintln!("Status {} rejected: {}", status, raw_response);
//!     }
//!     Err(Error::Validation) => eprintln!("Response shape was rejected"),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod descriptor;
mod error;
pub mod parse;
mod response;
mod route;

pub use client::{Client, ClientBuilder, DEFAULT_ACCEPTABLE_STATUSES};
pub use descriptor::RequestDescriptor;
pub use error::{Error, Result};
pub use parse::{parse_validated, FnParser, Parser};
pub use response::Response;
pub use route::{ParameterEncoding, Route};
