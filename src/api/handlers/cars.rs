//! Handlers for the car service.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::CarRequest;
use crate::api::extract::{AppJson, AppPath};
use crate::application::services::CarWithUser;
use crate::constants::{MSG_NO_CONTENT, deleted};
use crate::domain::entities::Car;
use crate::error::{AppError, Message};
use crate::state::CarState;

/// Stores a car. `userId` is required and not checked against the user
/// service.
///
/// # Endpoint
///
/// `POST /api/v1/cars/add`
pub async fn add_car_handler(
    State(state): State<CarState>,
    AppJson(payload): AppJson<CarRequest>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    payload.validate()?;

    let car = state.car_service.add_car(payload.try_into_new_car()?).await?;

    Ok((StatusCode::CREATED, Json(car)))
}

/// Replaces a car.
///
/// # Endpoint
///
/// `PUT /api/v1/cars/{id}`
///
/// # Errors
///
/// Returns 404 if the car does not exist.
pub async fn edit_car_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<CarState>,
    AppJson(payload): AppJson<CarRequest>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    payload.validate()?;

    let car = state
        .car_service
        .edit_car(id, payload.try_into_new_car()?)
        .await?;

    Ok((StatusCode::CREATED, Json(car)))
}

/// `GET /api/v1/cars/all`
pub async fn list_cars_handler(State(state): State<CarState>) -> Result<Json<Vec<Car>>, AppError> {
    let cars = state.car_service.list_cars().await?;
    if cars.is_empty() {
        return Err(AppError::bad_request(MSG_NO_CONTENT));
    }

    Ok(Json(cars))
}

pub async fn get_car_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<CarState>,
) -> Result<Json<Car>, AppError> {
    Ok(Json(state.car_service.find_car(id).await?))
}

pub async fn delete_car_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<CarState>,
) -> Result<Json<Message>, AppError> {
    state.car_service.delete_car(id).await?;

    Ok(Json(Message::new(deleted("Car", id))))
}

/// Cars owned by a user; an unknown user yields `[]`.
///
/// # Endpoint
///
/// `GET /api/v1/cars/byUserId/{userId}`
pub async fn cars_by_user_handler(
    AppPath(user_id): AppPath<i64>,
    State(state): State<CarState>,
) -> Result<Json<Vec<Car>>, AppError> {
    Ok(Json(state.car_service.find_by_user_id(user_id).await?))
}

/// `GET /api/v1/cars/detail-car-and-user/{id}`
pub async fn car_detail_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<CarState>,
) -> Result<Json<CarWithUser>, AppError> {
    Ok(Json(state.car_service.find_car_with_user(id).await?))
}
