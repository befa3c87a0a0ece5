//! Plugins API.

use std::path::Path;

use reqwest::multipart::Form;

use crate::api::rabbithole::stream_file_part;
use crate::client::{CheshireCatClient, Response};
use crate::error::Result;

/// Plugins API client.
pub struct PluginsApi {
    client: CheshireCatClient,
}

impl PluginsApi {
    pub(crate) fn new(client: CheshireCatClient) -> Self {
        Self { client }
    }

    /// List installed and registry plugins.
    pub async fn list(&self) -> Result<Response> {
        self.client.get("plugins/").await
    }

    /// Install a plugin from a local archive.
    ///
    /// The archive is streamed as a multipart `file` part. A missing or
    /// unreadable path fails before any network call.
    pub async fn install(&self, path: impl AsRef<Path>) -> Result<Response> {
        let part = stream_file_part(path.as_ref(), None, None).await?;
        let form = Form::new().part("file", part);
        self.client.post_multipart("plugins/upload", form).await
    }

    /// Toggle a plugin on or off.
    pub async fn toggle(&self, plugin_id: &str) -> Result<Response> {
        self.client
            .put_empty(&format!(
                "plugins/toggle/{}",
                CheshireCatClient::encode_segment(plugin_id)
            ))
            .await
    }
}
