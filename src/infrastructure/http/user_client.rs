//! HTTP client for the user service.

use async_trait::async_trait;

use super::{decode, endpoint};
use crate::domain::clients::{ClientError, UserClient};
use crate::domain::entities::User;

#[derive(Debug, Clone)]
pub struct HttpUserClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpUserClient {
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl UserClient for HttpUserClient {
    async fn find_user(&self, user_id: i64) -> Result<User, ClientError> {
        let url = endpoint(&self.base_url, &user_id.to_string());
        tracing::debug!(%url, "GET user");

        let response = self.client.get(&url).send().await?;
        decode(response).await
    }
}
