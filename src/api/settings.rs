//! Settings API.

use serde::Serialize;

use crate::client::{CheshireCatClient, Response};
use crate::error::Result;

/// Query parameters for listing settings.
#[derive(Debug, Default, Serialize)]
struct ListSettingsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
}

/// Settings API client.
pub struct SettingsApi {
    client: CheshireCatClient,
}

impl SettingsApi {
    pub(crate) fn new(client: CheshireCatClient) -> Self {
        Self { client }
    }

    /// List all settings.
    pub async fn list(&self) -> Result<Response> {
        self.client.get("settings/").await
    }

    /// List settings matching a search term.
    pub async fn search(&self, term: impl Into<String>) -> Result<Response> {
        self.client
            .get_with_query(
                "settings/",
                &ListSettingsQuery {
                    search: Some(term.into()),
                },
            )
            .await
    }

    /// Create a new setting.
    pub async fn create<B>(&self, payload: &B) -> Result<Response>
    where
        B: serde::Serialize + ?Sized,
    {
        self.client.post_json("settings/", payload).await
    }

    /// Get a setting by ID.
    pub async fn get(&self, setting_id: &str) -> Result<Response> {
        self.client
            .get(&format!(
                "settings/{}",
                CheshireCatClient::encode_segment(setting_id)
            ))
            .await
    }

    /// Update a setting.
    pub async fn update<B>(&self, setting_id: &str, payload: &B) -> Result<Response>
    where
        B: serde::Serialize + ?Sized,
    {
        self.client
            .put_json(
                &format!("settings/{}", CheshireCatClient::encode_segment(setting_id)),
                payload,
            )
            .await
    }

    /// Delete a setting.
    pub async fn delete(&self, setting_id: &str) -> Result<Response> {
        self.client
            .delete(&format!(
                "settings/{}",
                CheshireCatClient::encode_segment(setting_id)
            ))
            .await
    }
}
