//! Repository trait for car persistence.

use crate::domain::entities::{Car, NewCar};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the car store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCarRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Persists a new car, using `new_car.id` when provided.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id is already taken.
    async fn create(&self, new_car: NewCar) -> Result<Car, AppError>;

    /// Overwrites every mutable field of an existing car.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no car has this id.
    async fn update(&self, id: i64, car: NewCar) -> Result<Car, AppError>;

    async fn list(&self) -> Result<Vec<Car>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError>;

    /// Lists the cars whose `user_id` matches, ordered by id.
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Car>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no car has this id.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Round-trips to the store; used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
