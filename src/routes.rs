//! Top-level router configuration for each service.
//!
//! # Route Structure
//!
//! - `GET /health`            - Health check (database)
//! - `<base path>/*`          - Service API, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin
//! - **Path normalization** - Trailing slash handling, applied by [`normalize`]

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::api::routes::{car_routes, laptop_routes, user_routes};
use crate::config::ServiceKind;
use crate::state::{CarState, LaptopState, ServiceHealth, UserState};

fn service_router<S: ServiceHealth>(base_path: &str, routes: Router<S>, state: S) -> Router {
    Router::new()
        .route("/health", get(health_handler::<S>))
        .nest(base_path, routes)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// User service router, mounted at `/api/v1/users`.
pub fn user_router(state: UserState) -> Router {
    service_router(ServiceKind::User.base_path(), user_routes(), state)
}

/// Car service router, mounted at `/api/v1/cars`.
pub fn car_router(state: CarState) -> Router {
    service_router(ServiceKind::Car.base_path(), car_routes(), state)
}

/// Laptop service router, mounted at `/api/v1/lapTops`.
pub fn laptop_router(state: LaptopState) -> Router {
    service_router(ServiceKind::Laptop.base_path(), laptop_routes(), state)
}

/// Strips trailing slashes before routing, so `/all/` matches `/all`.
pub fn normalize(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
