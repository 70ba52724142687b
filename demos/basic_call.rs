//! Basic example demonstrating declarative GET and POST routes.
//!
//! This example shows how to:
//! - Create a client with basic configuration
//! - Declare routes and execute them
//! - Use query-string and JSON-body parameter encoding
//! - Access response data and metadata
//!
//! Run with: `cargo run --example basic_call`

use waypost::{Client, Error, Route};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("waypost=debug,basic_call=info")
        .init();

    // Create a client for the JSONPlaceholder API
    let client = Client::builder()
        .base_url("https://jsonplaceholder.typicode.com")?
        .default_header("User-Agent", "waypost-demo/0.1")?
        .build()?;

    println!("=== GET Route Example ===");
    let response = client.send(&Route::get("posts/1")).await?;
    println!("Status: {}", response.status);
    println!("Title: {}", response.data["title"]);
    println!("Request latency: {:?}", response.latency);
    println!();

    println!("=== POST Route Example (JSON body) ===");
    let route = Route::post("posts")
        .parameter("title", "My New Post")
        .parameter("body", "This is the content of my new post!")
        .parameter("userId", 1);
    let created = client.send(&route).await?;
    println!("Created post with id: {}", created.data["id"]);
    println!();

    println!("=== Query Parameter Example ===");
    let route = Route::get("comments").parameter("postId", 1);
    let comments = client.send(&route).await?;
    let count = comments.data.as_array().map(Vec::len).unwrap_or_default();
    println!("{} comments on post 1", count);

    Ok(())
}
