//! Shared state handed to handlers, one struct per service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::services::{CarService, LaptopService, UserService};
use crate::error::AppError;

#[derive(Clone)]
pub struct UserState {
    pub user_service: Arc<UserService>,
}

#[derive(Clone)]
pub struct CarState {
    pub car_service: Arc<CarService>,
}

#[derive(Clone)]
pub struct LaptopState {
    pub laptop_service: Arc<LaptopService>,
}

/// What the shared health endpoint needs to know about a service.
#[async_trait]
pub trait ServiceHealth: Clone + Send + Sync + 'static {
    fn service_name(&self) -> &'static str;

    async fn check_database(&self) -> Result<(), AppError>;
}

#[async_trait]
impl ServiceHealth for UserState {
    fn service_name(&self) -> &'static str {
        "user-service"
    }

    async fn check_database(&self) -> Result<(), AppError> {
        self.user_service.ping().await
    }
}

#[async_trait]
impl ServiceHealth for CarState {
    fn service_name(&self) -> &'static str {
        "car-service"
    }

    async fn check_database(&self) -> Result<(), AppError> {
        self.car_service.ping().await
    }
}

#[async_trait]
impl ServiceHealth for LaptopState {
    fn service_name(&self) -> &'static str {
        "laptop-service"
    }

    async fn check_database(&self) -> Result<(), AppError> {
        self.laptop_service.ping().await
    }
}
