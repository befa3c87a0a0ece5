//! Request and response payload types.
//!
//! The server accepts free-form JSON on most endpoints; these types are
//! conveniences for the common shapes. Every API method also accepts any
//! `serde::Serialize` payload, so callers are never forced through them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Chat message payload for `POST /message` and the WebSocket channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePayload {
    /// Message text.
    pub text: String,
    /// Optional user identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl MessagePayload {
    /// Create a payload from message text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user_id: None,
        }
    }
}

/// Credentials for `POST /auth/token`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// Access token issued by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token value.
    pub access_token: String,
    /// Token type, normally `bearer`.
    #[serde(default)]
    pub token_type: Option<String>,
}

/// User record payload for create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    /// Unique username.
    pub username: String,
    /// Plaintext password (create only; the server hashes it).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Granted permissions, keyed by resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<BTreeMap<String, Vec<String>>>,
}

/// Setting record payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingPayload {
    /// Setting name.
    pub name: String,
    /// Setting value, free-form JSON.
    pub value: serde_json::Value,
    /// Optional grouping category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Memory point payload for `POST /memory/collections/{id}/points`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryPointPayload {
    /// Point content.
    pub content: String,
    /// Arbitrary metadata stored with the point.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
    /// Pre-computed embedding vector, if the caller supplies one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f32>>,
}

/// Options for file ingestion via the rabbithole.
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Filename reported to the server; defaults to the local file name.
    pub file_name: Option<String>,
    /// MIME type of the file part.
    pub content_type: Option<String>,
    /// Metadata map, sent as a JSON-encoded form field.
    pub metadata: BTreeMap<String, serde_json::Value>,
    /// Ingestion chunk size, sent as a stringified integer form field.
    pub chunk_size: u32,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            file_name: None,
            content_type: None,
            metadata: BTreeMap::new(),
            chunk_size: 128,
        }
    }
}
