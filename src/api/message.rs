//! Message API.

use crate::client::{CheshireCatClient, Response};
use crate::error::Result;
use crate::types::MessagePayload;

/// Message API client.
pub struct MessageApi {
    client: CheshireCatClient,
}

impl MessageApi {
    pub(crate) fn new(client: CheshireCatClient) -> Self {
        Self { client }
    }

    /// Send a chat message payload.
    pub async fn send<B>(&self, payload: &B) -> Result<Response>
    where
        B: serde::Serialize + ?Sized,
    {
        self.client.post_json("message", payload).await
    }

    /// Send a plain text message.
    pub async fn send_text(&self, text: impl Into<String>) -> Result<Response> {
        self.send(&MessagePayload::new(text)).await
    }
}
