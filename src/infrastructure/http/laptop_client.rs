//! HTTP client for the laptop service.

use async_trait::async_trait;

use super::{decode, endpoint};
use crate::domain::clients::{ClientError, LaptopClient};
use crate::domain::entities::Laptop;

#[derive(Debug, Clone)]
pub struct HttpLaptopClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpLaptopClient {
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl LaptopClient for HttpLaptopClient {
    async fn laptops_by_user_id(&self, user_id: i64) -> Result<Vec<Laptop>, ClientError> {
        let url = endpoint(&self.base_url, &format!("byUserId/{user_id}"));
        tracing::debug!(%url, "GET laptops by user");

        let response = self.client.get(&url).send().await?;
        decode(response).await
    }
}
