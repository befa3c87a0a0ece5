//! HTTP and WebSocket client SDK for the Cheshire Cat AI framework.
//!
//! This crate provides a typed client for the Cheshire Cat server: each
//! method maps one-to-one onto a REST endpoint or WebSocket frame. There is
//! no caching, retry, or batching; every call is a single round-trip whose
//! failures map onto a small [`Error`] taxonomy.
//!
//! # Example
//!
//! ```no_run
//! use cheshire_cat_client::{CheshireCatClient, Result};
//!
//! # async fn example() -> Result<()> {
//! // Create a client
//! let client = CheshireCatClient::builder()
//!     .base_url("http://localhost:1865")
//!     .api_key("secret")
//!     .build()?;
//!
//! // Check the server is up
//! let status = client.status().get().await?;
//! println!("{}", status.text());
//!
//! // Send a chat message over HTTP
//! let reply = client.message().send_text("Hello!").await?;
//! let body: serde_json::Value = reply.json()?;
//! println!("{body}");
//!
//! // Or talk over the WebSocket channel
//! let mut session = client.connect_ws().await?;
//! session.send(&serde_json::json!({ "text": "Hello!" })).await?;
//! let answer: serde_json::Value = session.receive().await?;
//! session.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Status**: server banner / liveness
//! - **Message**: send chat messages over HTTP
//! - **Auth**: token issuance, available permissions
//! - **Users**: CRUD with pagination
//! - **Settings**: CRUD with optional search
//! - **Memory**: collection points (list, create, delete)
//! - **Plugins**: list, install from archive, toggle
//! - **Rabbithole**: file ingestion via streamed multipart upload
//! - **WebSocket**: persistent JSON-frame conversation channel

pub mod api;
pub mod client;
pub mod error;
pub mod types;
pub mod ws;

pub use client::{CheshireCatClient, ClientBuilder, Response};
pub use error::{Error, Result};
pub use types::*;
pub use ws::WsSession;

// Re-export API types that are commonly used with query methods
pub use api::PointsQuery;
