//! Repository trait for laptop persistence.

use crate::domain::entities::{Laptop, NewLaptop};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the laptop store. Mirrors [`super::CarRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LaptopRepository: Send + Sync {
    async fn create(&self, new_laptop: NewLaptop) -> Result<Laptop, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no laptop has this id.
    async fn update(&self, id: i64, laptop: NewLaptop) -> Result<Laptop, AppError>;

    async fn list(&self) -> Result<Vec<Laptop>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Laptop>, AppError>;

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Laptop>, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Round-trips to the store; used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
