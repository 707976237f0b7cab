//! Fixed response messages shared by the three services.
//!
//! The wording is part of the public API: clients match on these strings.

pub const MSG_USERNAME_EXISTS: &str = "Username already exist!";
pub const MSG_EMAIL_EXISTS: &str = "Email already exist!";

/// Body of `GET /all` when the store is empty.
pub const MSG_NO_CONTENT: &str = "Sorry, No Content Almost!";

/// Placeholder used by the aggregation view in place of an empty collection.
pub const MSG_NO_RELATED_CONTENT: &str = "Sorry, No Almost Content!";

pub fn not_found(entity: &str, id: i64) -> String {
    format!("{entity} does not exist with ID:{id}")
}

pub fn deleted(entity: &str, id: i64) -> String {
    format!("{entity} deleted successfully with ID:{id}")
}

/// Rejection for a car proxy call naming an unknown owner.
pub fn unknown_owner(user_id: i64) -> String {
    format!("User does not exist with ID:{user_id}!")
}

pub fn car_deleted(car_id: i64) -> String {
    format!("Car with ID:{car_id} deleted successfully!")
}
