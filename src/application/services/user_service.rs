//! User management, car proxy and the user + cars + laptops aggregation.

use std::sync::Arc;

use serde::Serialize;

use crate::constants::{
    MSG_EMAIL_EXISTS, MSG_NO_RELATED_CONTENT, MSG_USERNAME_EXISTS, not_found, unknown_owner,
};
use crate::domain::clients::{CarClient, LaptopClient};
use crate::domain::entities::{Car, Laptop, NewCar, NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// A related collection in the aggregation view.
///
/// Serializes as the plain list, or as a placeholder string when the owning
/// service returned nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Related<T> {
    Items(Vec<T>),
    Placeholder(&'static str),
}

impl<T> Related<T> {
    fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Related::Placeholder(MSG_NO_RELATED_CONTENT)
        } else {
            Related::Items(items)
        }
    }
}

/// A user together with everything the sibling services hold for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserWithRelated {
    pub user: User,
    pub cars: Related<Car>,
    pub laptops: Related<Laptop>,
}

/// Service behind every user-service endpoint.
///
/// Owns the user store and talks to the car and laptop services through their
/// clients. Remote calls are sequential and unguarded: a failing sibling fails
/// the whole operation.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    car_client: Arc<dyn CarClient>,
    laptop_client: Arc<dyn LaptopClient>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        repository: Arc<dyn UserRepository>,
        car_client: Arc<dyn CarClient>,
        laptop_client: Arc<dyn LaptopClient>,
    ) -> Self {
        Self {
            repository,
            car_client,
            laptop_client,
        }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Duplicate`] if the username or email is taken; nothing
    /// is written in that case.
    /// Returns [`AppError::Conflict`] if an explicit id is already in use.
    pub async fn add_user(&self, new_user: NewUser) -> Result<User, AppError> {
        if self.repository.exists_by_username(&new_user.username).await? {
            return Err(AppError::duplicate(MSG_USERNAME_EXISTS));
        }
        if self.repository.exists_by_email(&new_user.email).await? {
            return Err(AppError::duplicate(MSG_EMAIL_EXISTS));
        }

        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Replaces every field of an existing user.
    ///
    /// A user may keep its own username and email; taking another user's is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Duplicate`] if the username or email belongs to
    /// another user.
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn edit_user(&self, id: i64, user: NewUser) -> Result<User, AppError> {
        if let Some(owner) = self.repository.find_by_username(&user.username).await?
            && owner.id != id
        {
            return Err(AppError::duplicate(MSG_USERNAME_EXISTS));
        }
        if let Some(owner) = self.repository.find_by_email(&user.email).await?
            && owner.id != id
        {
            return Err(AppError::duplicate(MSG_EMAIL_EXISTS));
        }

        let user = self.repository.update(id, user).await?;
        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn find_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(not_found("User", id)))
    }

    /// Deletes a user. Its cars and laptops stay in their services.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.find_user(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Checks that the store answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    pub async fn exists(&self, id: i64) -> Result<bool, AppError> {
        self.repository.exists_by_id(id).await
    }

    /// Fetches the cars of an existing user from the car service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Upstream`] if the car service call fails.
    pub async fn find_cars_of_user(&self, user_id: i64) -> Result<Vec<Car>, AppError> {
        self.find_user(user_id).await?;
        Ok(self.car_client.cars_by_user_id(user_id).await?)
    }

    /// Fetches the laptops of an existing user from the laptop service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Upstream`] if the laptop service call fails.
    pub async fn find_laptops_of_user(&self, user_id: i64) -> Result<Vec<Laptop>, AppError> {
        self.find_user(user_id).await?;
        Ok(self.laptop_client.laptops_by_user_id(user_id).await?)
    }

    /// Creates a car for `user_id` through the car service.
    ///
    /// The owner in `car` is overwritten with `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Duplicate`] if the user does not exist; the car
    /// service is not called.
    /// Returns [`AppError::Upstream`] if the car service call fails.
    pub async fn save_car(&self, user_id: i64, mut car: NewCar) -> Result<Car, AppError> {
        self.ensure_owner(user_id).await?;
        car.user_id = user_id;

        let car = self.car_client.add_car(car).await?;
        tracing::info!(user_id, car_id = car.id, "Car created through car service");
        Ok(car)
    }

    /// Replaces car `car_id` through the car service, assigning it to `user_id`.
    ///
    /// # Errors
    ///
    /// See [`Self::save_car`].
    pub async fn edit_car(&self, user_id: i64, car_id: i64, mut car: NewCar) -> Result<Car, AppError> {
        self.ensure_owner(user_id).await?;
        car.user_id = user_id;

        let car = self.car_client.update_car(car_id, car).await?;
        tracing::info!(user_id, car_id, "Car updated through car service");
        Ok(car)
    }

    /// Deletes car `car_id` through the car service.
    ///
    /// # Errors
    ///
    /// See [`Self::save_car`].
    pub async fn delete_car(&self, user_id: i64, car_id: i64) -> Result<(), AppError> {
        self.ensure_owner(user_id).await?;

        self.car_client.delete_car(car_id).await?;
        tracing::info!(user_id, car_id, "Car deleted through car service");
        Ok(())
    }

    /// Assembles a user with its cars and laptops.
    ///
    /// The car service is queried first, then the laptop service. Empty
    /// collections are replaced with a placeholder message.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist; no remote
    /// call is made.
    /// Returns [`AppError::Upstream`] if either remote call fails.
    pub async fn get_user_with_related(&self, user_id: i64) -> Result<UserWithRelated, AppError> {
        let user = self.find_user(user_id).await?;

        let cars = self.car_client.cars_by_user_id(user_id).await?;
        let laptops = self.laptop_client.laptops_by_user_id(user_id).await?;

        tracing::debug!(
            user_id,
            cars = cars.len(),
            laptops = laptops.len(),
            "Aggregated user view"
        );

        Ok(UserWithRelated {
            user,
            cars: Related::from_items(cars),
            laptops: Related::from_items(laptops),
        })
    }

    async fn ensure_owner(&self, user_id: i64) -> Result<(), AppError> {
        if !self.repository.exists_by_id(user_id).await? {
            return Err(AppError::duplicate(unknown_owner(user_id)));
        }
        Ok(())
    }
}
