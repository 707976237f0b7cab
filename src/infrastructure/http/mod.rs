//! `reqwest` implementations of the sibling-service clients.
//!
//! Every client is built from a base URL that already includes the resource
//! prefix (e.g. `http://localhost:8200/api/v1/cars`). No request timeout is
//! set and nothing is retried.

mod car_client;
mod laptop_client;
mod user_client;

pub use car_client::HttpCarClient;
pub use laptop_client::HttpLaptopClient;
pub use user_client::HttpUserClient;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::domain::clients::ClientError;
use crate::error::Message;

/// Joins a base URL and a path without doubling or dropping the slash.
fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

/// Turns a non-success reply into [`ClientError::Status`], reading the
/// `{"message"}` envelope when the sibling sent one.
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

fn status_error(status: StatusCode, body: &str) -> ClientError {
    let message = serde_json::from_str::<Message>(body)
        .map(|m| m.message)
        .unwrap_or_else(|_| body.to_string());

    ClientError::Status {
        status: status.as_u16(),
        message,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}
