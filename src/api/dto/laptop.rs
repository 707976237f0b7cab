//! Laptop input body.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::NewLaptop;
use crate::error::AppError;

/// Body of `POST /add` and `PUT /{id}` on the laptop service.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LaptopRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,

    #[validate(length(min = 1, max = 255, message = "brand must not be empty"))]
    pub brand: String,

    #[serde(default)]
    pub is_in_stock: bool,

    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "userId must be positive"))]
    pub user_id: Option<i64>,
}

impl TryFrom<LaptopRequest> for NewLaptop {
    type Error = AppError;

    fn try_from(req: LaptopRequest) -> Result<Self, Self::Error> {
        let user_id = req
            .user_id
            .ok_or_else(|| AppError::bad_request("userId is required"))?;

        Ok(NewLaptop {
            id: req.id,
            name: req.name,
            price: req.price,
            brand: req.brand,
            is_in_stock: req.is_in_stock,
            description: req.description,
            user_id,
        })
    }
}
