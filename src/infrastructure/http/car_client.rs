//! HTTP client for the car service.

use async_trait::async_trait;

use super::{check_status, decode, endpoint};
use crate::domain::clients::{CarClient, ClientError};
use crate::domain::entities::{Car, NewCar};

/// Calls the car service at `base_url` (e.g. `http://localhost:8200/api/v1/cars`).
#[derive(Debug, Clone)]
pub struct HttpCarClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCarClient {
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl CarClient for HttpCarClient {
    async fn add_car(&self, car: NewCar) -> Result<Car, ClientError> {
        let url = endpoint(&self.base_url, "add");
        tracing::debug!(%url, "POST car");

        let response = self.client.post(&url).json(&car).send().await?;
        decode(response).await
    }

    async fn update_car(&self, car_id: i64, car: NewCar) -> Result<Car, ClientError> {
        let url = endpoint(&self.base_url, &car_id.to_string());
        tracing::debug!(%url, "PUT car");

        let response = self.client.put(&url).json(&car).send().await?;
        decode(response).await
    }

    async fn delete_car(&self, car_id: i64) -> Result<(), ClientError> {
        let url = endpoint(&self.base_url, &car_id.to_string());
        tracing::debug!(%url, "DELETE car");

        let response = self.client.delete(&url).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn cars_by_user_id(&self, user_id: i64) -> Result<Vec<Car>, ClientError> {
        let url = endpoint(&self.base_url, &format!("byUserId/{user_id}"));
        tracing::debug!(%url, "GET cars by user");

        let response = self.client.get(&url).send().await?;
        decode(response).await
    }
}
