//! Auth API.

use crate::client::{CheshireCatClient, Response};
use crate::error::Result;
use crate::types::TokenRequest;

/// Auth API client.
pub struct AuthApi {
    client: CheshireCatClient,
}

impl AuthApi {
    pub(crate) fn new(client: CheshireCatClient) -> Self {
        Self { client }
    }

    /// Request an access token.
    pub async fn token<B>(&self, payload: &B) -> Result<Response>
    where
        B: serde::Serialize + ?Sized,
    {
        self.client.post_json("auth/token", payload).await
    }

    /// Request an access token for a username/password pair.
    pub async fn token_for(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Response> {
        self.token(&TokenRequest {
            username: username.into(),
            password: password.into(),
        })
        .await
    }

    /// List the permissions the server knows about.
    pub async fn available_permissions(&self) -> Result<Response> {
        self.client.get("auth/available-permissions").await
    }
}
