//! Handlers for the user service.
//!
//! Besides user CRUD this service fronts the car service (`/addCar`,
//! `/editCar`, `/deleteCar`) and serves the user + cars + laptops view.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::{CarRequest, UserRequest};
use crate::api::extract::{AppJson, AppPath};
use crate::application::services::UserWithRelated;
use crate::constants::{MSG_NO_CONTENT, car_deleted, deleted};
use crate::domain::entities::{Car, Laptop, User};
use crate::error::{AppError, Message};
use crate::state::UserState;

/// Registers a user.
///
/// # Endpoint
///
/// `POST /api/v1/users/add`
///
/// # Errors
///
/// Returns 400 on invalid input or if the username or email is taken.
/// Returns 409 if an explicit `id` is already in use.
pub async fn add_user_handler(
    State(state): State<UserState>,
    AppJson(payload): AppJson<UserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    payload.validate()?;

    let user = state.user_service.add_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Replaces a user.
///
/// # Endpoint
///
/// `PUT /api/v1/users/{id}`
///
/// The path id wins over any id in the body.
///
/// # Errors
///
/// Returns 400 on invalid input or if the username or email belongs to
/// another user.
/// Returns 404 if the user does not exist.
pub async fn edit_user_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<UserState>,
    AppJson(payload): AppJson<UserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    payload.validate()?;

    let user = state.user_service.edit_user(id, payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Lists every user.
///
/// # Endpoint
///
/// `GET /api/v1/users/all`
///
/// # Errors
///
/// Returns 400 with `"Sorry, No Content Almost!"` when there are no users.
pub async fn list_users_handler(
    State(state): State<UserState>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = state.user_service.list_users().await?;
    if users.is_empty() {
        return Err(AppError::bad_request(MSG_NO_CONTENT));
    }

    Ok(Json(users))
}

/// `GET /api/v1/users/{id}`
pub async fn get_user_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<UserState>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.user_service.find_user(id).await?))
}

/// Deletes a user. Its cars and laptops are left in place.
///
/// # Endpoint
///
/// `DELETE /api/v1/users/{id}`
pub async fn delete_user_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<UserState>,
) -> Result<Json<Message>, AppError> {
    state.user_service.delete_user(id).await?;

    Ok(Json(Message::new(deleted("User", id))))
}

/// `GET /api/v1/users/cars/{userId}`
pub async fn user_cars_handler(
    AppPath(user_id): AppPath<i64>,
    State(state): State<UserState>,
) -> Result<Json<Vec<Car>>, AppError> {
    Ok(Json(state.user_service.find_cars_of_user(user_id).await?))
}

/// `GET /api/v1/users/lapTops/{userId}`
pub async fn user_laptops_handler(
    AppPath(user_id): AppPath<i64>,
    State(state): State<UserState>,
) -> Result<Json<Vec<Laptop>>, AppError> {
    Ok(Json(state.user_service.find_laptops_of_user(user_id).await?))
}

/// Returns a user with its cars and laptops.
///
/// # Endpoint
///
/// `GET /api/v1/users/cars-and-lapTops/{userId}`
///
/// # Response
///
/// ```json
/// {
///   "user": { "id": 1, "firstName": "Alice", ... },
///   "cars": [ { "id": 3, "name": "Clio", ... } ],
///   "laptops": "Sorry, No Almost Content!"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 with only a message if the user does not exist.
/// Returns 502 if the car or laptop service fails.
pub async fn user_assets_handler(
    AppPath(user_id): AppPath<i64>,
    State(state): State<UserState>,
) -> Result<Json<UserWithRelated>, AppError> {
    Ok(Json(state.user_service.get_user_with_related(user_id).await?))
}

/// Creates a car for a user through the car service.
///
/// # Endpoint
///
/// `POST /api/v1/users/addCar/{userId}`
///
/// # Errors
///
/// Returns 400 if the user does not exist.
/// Returns 502 if the car service rejects the call or is unreachable.
pub async fn add_car_handler(
    AppPath(user_id): AppPath<i64>,
    State(state): State<UserState>,
    AppJson(payload): AppJson<CarRequest>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    payload.validate()?;

    let car = state
        .user_service
        .save_car(user_id, payload.into_new_car(user_id))
        .await?;

    Ok((StatusCode::CREATED, Json(car)))
}

/// `PUT /api/v1/users/editCar/{userId}/{carId}`
pub async fn edit_car_handler(
    AppPath((user_id, car_id)): AppPath<(i64, i64)>,
    State(state): State<UserState>,
    AppJson(payload): AppJson<CarRequest>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    payload.validate()?;

    let car = state
        .user_service
        .edit_car(user_id, car_id, payload.into_new_car(user_id))
        .await?;

    Ok((StatusCode::CREATED, Json(car)))
}

/// `DELETE /api/v1/users/deleteCar/{userId}/{carId}`
pub async fn delete_car_handler(
    AppPath((user_id, car_id)): AppPath<(i64, i64)>,
    State(state): State<UserState>,
) -> Result<Json<Message>, AppError> {
    state.user_service.delete_car(user_id, car_id).await?;

    Ok(Json(Message::new(car_deleted(car_id))))
}
