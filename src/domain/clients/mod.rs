//! Remote client traits for calling sibling services.
//!
//! Each service owns one entity; views that span entities go through these
//! clients instead of a shared database. Calls are plain synchronous
//! request/response: no retry, no circuit breaker, no request deduplication.
//!
//! # Clients
//!
//! - [`CarClient`] - user service → car service (collection fetch + mutation proxy)
//! - [`LaptopClient`] - user service → laptop service (collection fetch)
//! - [`UserClient`] - car/laptop service → user service (owner lookup)
//!
//! HTTP implementations live in `crate::infrastructure::http`.

use async_trait::async_trait;

use crate::domain::entities::{Car, Laptop, NewCar, User};

/// Failure of an outbound call to a sibling service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The sibling answered with a non-success status.
    #[error("upstream responded with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The sibling could not be reached.
    #[error("upstream unreachable: {0}")]
    Transport(String),

    /// The sibling answered with a body that does not match the expected shape.
    #[error("invalid upstream response: {0}")]
    Decode(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarClient: Send + Sync {
    /// Forwards a create to the car service (`POST /add`).
    async fn add_car(&self, car: NewCar) -> Result<Car, ClientError>;

    /// Forwards a full replace to the car service (`PUT /{id}`).
    async fn update_car(&self, car_id: i64, car: NewCar) -> Result<Car, ClientError>;

    /// Forwards a delete to the car service (`DELETE /{id}`).
    async fn delete_car(&self, car_id: i64) -> Result<(), ClientError>;

    /// Fetches every car owned by `user_id` (`GET /byUserId/{userId}`).
    async fn cars_by_user_id(&self, user_id: i64) -> Result<Vec<Car>, ClientError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LaptopClient: Send + Sync {
    /// Fetches every laptop owned by `user_id` (`GET /byUserId/{userId}`).
    async fn laptops_by_user_id(&self, user_id: i64) -> Result<Vec<Laptop>, ClientError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserClient: Send + Sync {
    /// Fetches a user by id (`GET /{id}`).
    async fn find_user(&self, user_id: i64) -> Result<User, ClientError>;
}
