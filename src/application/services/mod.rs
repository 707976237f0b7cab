//! Business logic services for the application layer.

pub mod car_service;
pub mod laptop_service;
pub mod user_service;

pub use car_service::{CarService, CarWithUser};
pub use laptop_service::{LaptopService, LaptopWithUser};
pub use user_service::{Related, UserService, UserWithRelated};
