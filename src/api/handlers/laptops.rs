//! Handlers for the laptop service.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::LaptopRequest;
use crate::api::extract::{AppJson, AppPath};
use crate::application::services::LaptopWithUser;
use crate::constants::{MSG_NO_CONTENT, deleted};
use crate::domain::entities::Laptop;
use crate::error::{AppError, Message};
use crate::state::LaptopState;

/// `POST /api/v1/lapTops/add`
pub async fn add_laptop_handler(
    State(state): State<LaptopState>,
    AppJson(payload): AppJson<LaptopRequest>,
) -> Result<(StatusCode, Json<Laptop>), AppError> {
    payload.validate()?;

    let laptop = state.laptop_service.add_laptop(payload.try_into()?).await?;

    Ok((StatusCode::CREATED, Json(laptop)))
}

/// Replaces a laptop.
///
/// # Endpoint
///
/// `PUT /api/v1/lapTops/{id}`
///
/// # Errors
///
/// Returns 404 if the laptop does not exist.
pub async fn edit_laptop_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<LaptopState>,
    AppJson(payload): AppJson<LaptopRequest>,
) -> Result<(StatusCode, Json<Laptop>), AppError> {
    payload.validate()?;

    let laptop = state
        .laptop_service
        .edit_laptop(id, payload.try_into()?)
        .await?;

    Ok((StatusCode::CREATED, Json(laptop)))
}

pub async fn list_laptops_handler(
    State(state): State<LaptopState>,
) -> Result<Json<Vec<Laptop>>, AppError> {
    let laptops = state.laptop_service.list_laptops().await?;
    if laptops.is_empty() {
        return Err(AppError::bad_request(MSG_NO_CONTENT));
    }

    Ok(Json(laptops))
}

pub async fn get_laptop_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<LaptopState>,
) -> Result<Json<Laptop>, AppError> {
    Ok(Json(state.laptop_service.find_laptop(id).await?))
}

pub async fn delete_laptop_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<LaptopState>,
) -> Result<Json<Message>, AppError> {
    state.laptop_service.delete_laptop(id).await?;

    Ok(Json(Message::new(deleted("LapTop", id))))
}

/// `GET /api/v1/lapTops/byUserId/{userId}`
pub async fn laptops_by_user_handler(
    AppPath(user_id): AppPath<i64>,
    State(state): State<LaptopState>,
) -> Result<Json<Vec<Laptop>>, AppError> {
    Ok(Json(state.laptop_service.find_by_user_id(user_id).await?))
}

/// Returns a laptop with its owner.
///
/// # Endpoint
///
/// `GET /api/v1/lapTops/detail-laptop-and-user/{id}`
///
/// # Errors
///
/// Returns 404 if the laptop does not exist.
/// Returns 502 if the user service call fails.
pub async fn laptop_detail_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<LaptopState>,
) -> Result<Json<LaptopWithUser>, AppError> {
    Ok(Json(state.laptop_service.find_laptop_with_user(id).await?))
}
