//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, sibling-service calls and business
//! rules, and give HTTP handlers a clean API.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - user CRUD, car proxy and aggregation
//! - [`services::car_service::CarService`] - car CRUD and owner detail view
//! - [`services::laptop_service::LaptopService`] - laptop CRUD and owner detail view

pub mod services;
