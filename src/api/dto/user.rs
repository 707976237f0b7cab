//! User input body.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::NewUser;

/// Body of `POST /add` and `PUT /{id}` on the user service.
///
/// `id` is only honoured on create.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "firstName must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "lastName must be 1-100 characters"))]
    pub last_name: String,

    #[validate(length(min = 3, max = 50, message = "username must be 3-50 characters"))]
    pub username: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}

impl From<UserRequest> for NewUser {
    fn from(req: UserRequest) -> Self {
        NewUser {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            username: req.username,
            email: req.email,
        }
    }
}
