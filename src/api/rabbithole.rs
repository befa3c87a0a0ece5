//! Rabbithole (file ingestion) API.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use tokio_util::codec::{BytesCodec, FramedRead};

use crate::client::{CheshireCatClient, Response};
use crate::error::{Error, Result};
use crate::types::UploadOptions;

/// Build a streamed multipart file part after checking local preconditions.
///
/// The existence and readability checks run before any network I/O; their
/// failures surface as [`Error::FileUpload`].
pub(crate) async fn stream_file_part(
    path: &Path,
    file_name: Option<String>,
    content_type: Option<&str>,
) -> Result<Part> {
    if tokio::fs::metadata(path).await.is_err() {
        return Err(Error::FileUpload(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    let file = tokio::fs::File::open(path).await.map_err(|e| {
        Error::FileUpload(format!("File is not readable: {} ({})", path.display(), e))
    })?;

    let name = file_name
        .or_else(|| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .ok_or_else(|| {
            Error::FileUpload(format!("Cannot determine file name for: {}", path.display()))
        })?;

    let stream = FramedRead::new(file, BytesCodec::new());
    let mut part = Part::stream(reqwest::Body::wrap_stream(stream)).file_name(name);

    if let Some(content_type) = content_type {
        part = part
            .mime_str(content_type)
            .map_err(|_| Error::FileUpload(format!("Invalid content type: {content_type}")))?;
    }

    Ok(part)
}

/// Rabbithole API client.
///
/// Files posted here are ingested into the Cat's declarative memory.
pub struct RabbitholeApi {
    client: CheshireCatClient,
}

impl RabbitholeApi {
    pub(crate) fn new(client: CheshireCatClient) -> Self {
        Self { client }
    }

    /// Upload a local file for ingestion with default options.
    pub async fn upload(&self, path: impl AsRef<Path>) -> Result<Response> {
        self.upload_with_options(path, UploadOptions::default()).await
    }

    /// Upload a local file for ingestion.
    ///
    /// The file is read as a stream and posted as multipart form data with
    /// a `chunk_size` field and a JSON-encoded `metadata` field.
    pub async fn upload_with_options(
        &self,
        path: impl AsRef<Path>,
        options: UploadOptions,
    ) -> Result<Response> {
        let part = stream_file_part(
            path.as_ref(),
            options.file_name,
            options.content_type.as_deref(),
        )
        .await?;

        let form = Form::new()
            .part("file", part)
            .text("chunk_size", options.chunk_size.to_string())
            .text("metadata", serde_json::to_string(&options.metadata)?);

        self.client.post_multipart("rabbithole/", form).await
    }
}
