//! Status API.

use crate::client::{CheshireCatClient, Response};
use crate::error::Result;

/// Status API client.
pub struct StatusApi {
    client: CheshireCatClient,
}

impl StatusApi {
    pub(crate) fn new(client: CheshireCatClient) -> Self {
        Self { client }
    }

    /// Get the server status banner.
    pub async fn get(&self) -> Result<Response> {
        self.client.get("/").await
    }

    /// Simple connectivity check - returns true if the server answers.
    pub async fn is_up(&self) -> bool {
        self.get().await.is_ok()
    }
}
