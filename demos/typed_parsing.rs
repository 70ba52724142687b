//! Validate-then-parse: turning response JSON into typed values.
//!
//! This example shows how to:
//! - Implement a named `Parser` for a response shape
//! - Use `FnParser` for one-off endpoints
//! - Fall back to serde-typed decoding with `send_as`
//! - Observe the fixed validation-failure error
//!
//! Run with: `cargo run --example typed_parsing`

use serde::Deserialize;
use serde_json::Value;
use waypost::{Client, Error, FnParser, Parser, Route};

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Post {
    #[serde(rename = "userId")]
    user_id: u32,
    id: u32,
    title: String,
    body: String,
}

/// Accepts a post object with a string title and extracts the title.
struct TitleParser;

impl Parser for TitleParser {
    type Output = String;

    fn is_valid(&self, json: &Value) -> bool {
        json.get("title").map_or(false, Value::is_string)
    }

    fn parse(&self, json: &Value) -> String {
        json["title"].as_str().unwrap_or_default().to_string()
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("waypost=debug,typed_parsing=info")
        .init();

    let client = Client::builder()
        .base_url("https://jsonplaceholder.typicode.com")?
        .build()?;

    println!("=== Named parser ===");
    let title = client
        .send_with(&Route::get("posts/1"), &TitleParser)
        .await?;
    println!("Title: {}", title.data);
    println!();

    println!("=== Closure parser ===");
    let id = FnParser::new(
        |json: &Value| json.get("id").map_or(false, Value::is_i64),
        |json: &Value| json["id"].as_i64().unwrap_or_default(),
    );
    let post_id = client.send_with(&Route::get("posts/1"), &id).await?;
    println!("id = {}", post_id.data);
    println!();

    println!("=== serde-typed decode ===");
    let post = client.send_as::<Post>(&Route::get("posts/1")).await?;
    println!("{} (user {})", post.data.title, post.data.user_id);
    println!();

    println!("=== Validation failure ===");
    let strict = FnParser::new(
        |json: &Value| json.get("missing").is_some(),
        |_: &Value| -> i64 { 0 },
    );
    match client.send_with(&Route::get("posts/1"), &strict).await {
        Err(Error::Validation) => println!("Shape rejected: {}", Error::Validation),
        other => println!("Unexpected outcome: {:?}", other.map(|r| r.status)),
    }

    Ok(())
}
