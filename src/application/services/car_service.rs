//! Car store operations and the car + owner detail view.

use std::sync::Arc;

use serde::Serialize;

use crate::constants::not_found;
use crate::domain::clients::UserClient;
use crate::domain::entities::{Car, NewCar, User};
use crate::domain::repositories::CarRepository;
use crate::error::AppError;

/// A car together with its owner fetched from the user service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarWithUser {
    pub car: Car,
    pub user: User,
}

/// Service behind every car-service endpoint.
pub struct CarService {
    repository: Arc<dyn CarRepository>,
    user_client: Arc<dyn UserClient>,
}

impl CarService {
    /// Creates a new car service.
    pub fn new(repository: Arc<dyn CarRepository>, user_client: Arc<dyn UserClient>) -> Self {
        Self {
            repository,
            user_client,
        }
    }

    /// Stores a new car. The owner reference is not checked here.
    pub async fn add_car(&self, new_car: NewCar) -> Result<Car, AppError> {
        let car = self.repository.create(new_car).await?;
        tracing::info!(car_id = car.id, user_id = car.user_id, "Car created");
        Ok(car)
    }

    /// Replaces every field of an existing car.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the car does not exist.
    pub async fn edit_car(&self, id: i64, car: NewCar) -> Result<Car, AppError> {
        let car = self.repository.update(id, car).await?;
        tracing::info!(car_id = id, "Car updated");
        Ok(car)
    }

    pub async fn list_cars(&self) -> Result<Vec<Car>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the car does not exist.
    pub async fn find_car(&self, id: i64) -> Result<Car, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(not_found("Car", id)))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the car does not exist.
    pub async fn delete_car(&self, id: i64) -> Result<(), AppError> {
        self.find_car(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(car_id = id, "Car deleted");
        Ok(())
    }

    /// Checks that the store answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Car>, AppError> {
        self.repository.find_by_user_id(user_id).await
    }

    /// Loads a car and its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the car does not exist.
    /// Returns [`AppError::Upstream`] if the user service call fails.
    pub async fn find_car_with_user(&self, id: i64) -> Result<CarWithUser, AppError> {
        let car = self.find_car(id).await?;
        let user = self.user_client.find_user(car.user_id).await?;
        Ok(CarWithUser { car, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clients::{ClientError, MockUserClient};
    use crate::domain::repositories::MockCarRepository;
    use chrono::Utc;

    fn create_test_car(id: i64, user_id: i64) -> Car {
        Car {
            id,
            name: "Model 3".to_string(),
            price: 42_000.0,
            brand: "Tesla".to_string(),
            registration_number: "EV-042".to_string(),
            is_in_stock: false,
            user_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn new_car() -> NewCar {
        NewCar {
            id: None,
            name: "Model 3".to_string(),
            price: 42_000.0,
            brand: "Tesla".to_string(),
            registration_number: "EV-042".to_string(),
            is_in_stock: false,
            user_id: 1,
        }
    }

    #[tokio::test]
    async fn test_edit_car_not_found() {
        let mut repo = MockCarRepository::new();
        repo.expect_update()
            .times(1)
            .returning(|id, _| Err(AppError::not_found(not_found("Car", id))));

        let service = CarService::new(Arc::new(repo), Arc::new(MockUserClient::new()));

        let err = service.edit_car(77, new_car()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Car does not exist with ID:77");
    }

    #[tokio::test]
    async fn test_find_car_not_found() {
        let mut repo = MockCarRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = CarService::new(Arc::new(repo), Arc::new(MockUserClient::new()));

        assert!(matches!(
            service.find_car(1).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_car_does_not_delete() {
        let mut repo = MockCarRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete().never();

        let service = CarService::new(Arc::new(repo), Arc::new(MockUserClient::new()));

        assert!(service.delete_car(1).await.is_err());
    }

    #[tokio::test]
    async fn test_find_car_with_user() {
        let mut repo = MockCarRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(create_test_car(id, 5))));

        let mut users = MockUserClient::new();
        users
            .expect_find_user()
            .withf(|id| *id == 5)
            .times(1)
            .returning(|id| {
                Ok(User::new(
                    id,
                    "Sam".to_string(),
                    "Lee".to_string(),
                    "sam".to_string(),
                    "sam@x.com".to_string(),
                    Utc::now(),
                    Utc::now(),
                ))
            });

        let service = CarService::new(Arc::new(repo), Arc::new(users));

        let detail = service.find_car_with_user(3).await.unwrap();
        assert_eq!(detail.car.id, 3);
        assert_eq!(detail.user.username, "sam");
    }

    #[tokio::test]
    async fn test_find_car_with_user_upstream_failure() {
        let mut repo = MockCarRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(create_test_car(id, 5))));

        let mut users = MockUserClient::new();
        users.expect_find_user().returning(|_| {
            Err(ClientError::Status {
                status: 404,
                message: "User does not exist with ID:5".to_string(),
            })
        });

        let service = CarService::new(Arc::new(repo), Arc::new(users));

        assert!(matches!(
            service.find_car_with_user(3).await.unwrap_err(),
            AppError::Upstream { .. }
        ));
    }
}
