//! Memory API.

use serde::Serialize;

use crate::client::{CheshireCatClient, Response};
use crate::error::Result;

/// Pagination parameters for listing memory points.
#[derive(Debug, Default, Serialize)]
pub struct PointsQuery {
    /// Maximum points to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Points to skip from the start of the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Memory API client.
pub struct MemoryApi {
    client: CheshireCatClient,
}

impl MemoryApi {
    pub(crate) fn new(client: CheshireCatClient) -> Self {
        Self { client }
    }

    fn points_path(collection_id: &str) -> String {
        format!(
            "memory/collections/{}/points",
            CheshireCatClient::encode_segment(collection_id)
        )
    }

    /// List points in a memory collection.
    pub async fn points(&self, collection_id: &str) -> Result<Response> {
        self.points_with_options(collection_id, PointsQuery::default())
            .await
    }

    /// List points in a memory collection with pagination.
    pub async fn points_with_options(
        &self,
        collection_id: &str,
        query: PointsQuery,
    ) -> Result<Response> {
        self.client
            .get_with_query(&Self::points_path(collection_id), &query)
            .await
    }

    /// Create a point in a memory collection.
    pub async fn create_point<B>(&self, collection_id: &str, payload: &B) -> Result<Response>
    where
        B: serde::Serialize + ?Sized,
    {
        self.client
            .post_json(&Self::points_path(collection_id), payload)
            .await
    }

    /// Delete a point from a memory collection.
    pub async fn delete_point(&self, collection_id: &str, point_id: &str) -> Result<Response> {
        self.client
            .delete(&format!(
                "{}/{}",
                Self::points_path(collection_id),
                CheshireCatClient::encode_segment(point_id)
            ))
            .await
    }
}
