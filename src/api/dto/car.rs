//! Car input body.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::NewCar;
use crate::error::AppError;

/// Body of car writes, on the car service and through the user service proxy.
///
/// The car service requires `userId`; the proxy takes the owner from the path
/// and ignores the body value.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,

    #[validate(length(min = 1, max = 255, message = "brand must not be empty"))]
    pub brand: String,

    #[validate(length(
        min = 1,
        max = 64,
        message = "registrationNumber must not be empty"
    ))]
    pub registration_number: String,

    #[serde(default)]
    pub is_in_stock: bool,

    #[serde(default)]
    #[validate(range(min = 1, message = "userId must be positive"))]
    pub user_id: Option<i64>,
}

impl CarRequest {
    /// Builds the store input, assigning `user_id` as owner.
    pub fn into_new_car(self, user_id: i64) -> NewCar {
        NewCar {
            id: self.id,
            name: self.name,
            price: self.price,
            brand: self.brand,
            registration_number: self.registration_number,
            is_in_stock: self.is_in_stock,
            user_id,
        }
    }

    /// Builds the store input from the body's own `userId`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `userId` is missing.
    pub fn try_into_new_car(self) -> Result<NewCar, AppError> {
        let user_id = self
            .user_id
            .ok_or_else(|| AppError::bad_request("userId is required"))?;
        Ok(self.into_new_car(user_id))
    }
}
