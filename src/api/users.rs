//! Users API.

use serde::Serialize;

use crate::client::{CheshireCatClient, Response};
use crate::error::Result;

/// Pagination parameters for listing users.
///
/// Field order matters: the query string is always `skip=<n>&limit=<n>`.
#[derive(Debug, Serialize)]
struct ListUsersQuery {
    skip: u32,
    limit: u32,
}

/// Users API client.
pub struct UsersApi {
    client: CheshireCatClient,
}

impl UsersApi {
    pub(crate) fn new(client: CheshireCatClient) -> Self {
        Self { client }
    }

    /// Create a new user.
    pub async fn create<B>(&self, payload: &B) -> Result<Response>
    where
        B: serde::Serialize + ?Sized,
    {
        self.client.post_json("users/", payload).await
    }

    /// List users with pagination.
    pub async fn list(&self, skip: u32, limit: u32) -> Result<Response> {
        self.client
            .get_with_query("users/", &ListUsersQuery { skip, limit })
            .await
    }

    /// Get a user by ID.
    pub async fn get(&self, user_id: &str) -> Result<Response> {
        self.client
            .get(&format!("users/{}", CheshireCatClient::encode_segment(user_id)))
            .await
    }

    /// Update a user.
    pub async fn update<B>(&self, user_id: &str, payload: &B) -> Result<Response>
    where
        B: serde::Serialize + ?Sized,
    {
        self.client
            .put_json(
                &format!("users/{}", CheshireCatClient::encode_segment(user_id)),
                payload,
            )
            .await
    }

    /// Delete a user.
    pub async fn delete(&self, user_id: &str) -> Result<Response> {
        self.client
            .delete(&format!("users/{}", CheshireCatClient::encode_segment(user_id)))
            .await
    }
}
