//! Laptop store operations and the laptop + owner detail view.

use std::sync::Arc;

use serde::Serialize;

use crate::constants::not_found;
use crate::domain::clients::UserClient;
use crate::domain::entities::{Laptop, NewLaptop, User};
use crate::domain::repositories::LaptopRepository;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaptopWithUser {
    pub laptop: Laptop,
    pub user: User,
}

/// Service behind every laptop-service endpoint.
pub struct LaptopService {
    repository: Arc<dyn LaptopRepository>,
    user_client: Arc<dyn UserClient>,
}

impl LaptopService {
    pub fn new(repository: Arc<dyn LaptopRepository>, user_client: Arc<dyn UserClient>) -> Self {
        Self {
            repository,
            user_client,
        }
    }

    pub async fn add_laptop(&self, new_laptop: NewLaptop) -> Result<Laptop, AppError> {
        let laptop = self.repository.create(new_laptop).await?;
        tracing::info!(laptop_id = laptop.id, user_id = laptop.user_id, "Laptop created");
        Ok(laptop)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the laptop does not exist.
    pub async fn edit_laptop(&self, id: i64, laptop: NewLaptop) -> Result<Laptop, AppError> {
        let laptop = self.repository.update(id, laptop).await?;
        tracing::info!(laptop_id = id, "Laptop updated");
        Ok(laptop)
    }

    pub async fn list_laptops(&self) -> Result<Vec<Laptop>, AppError> {
        self.repository.list().await
    }

    pub async fn find_laptop(&self, id: i64) -> Result<Laptop, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(not_found("LapTop", id)))
    }

    pub async fn delete_laptop(&self, id: i64) -> Result<(), AppError> {
        self.find_laptop(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(laptop_id = id, "Laptop deleted");
        Ok(())
    }

    /// Checks that the store answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Laptop>, AppError> {
        self.repository.find_by_user_id(user_id).await
    }

    /// Loads a laptop and its owner from the user service.
    pub async fn find_laptop_with_user(&self, id: i64) -> Result<LaptopWithUser, AppError> {
        let laptop = self.find_laptop(id).await?;
        let user = self.user_client.find_user(laptop.user_id).await?;
        Ok(LaptopWithUser { laptop, user })
    }
}
