//! Repository trait definitions for the domain layer.
//!
//! These traits abstract each service's entity store. PostgreSQL
//! implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - users, with username/email uniqueness lookups
//! - [`CarRepository`] - cars, with lookup by owning user
//! - [`LaptopRepository`] - laptops, with lookup by owning user
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod car_repository;
pub mod laptop_repository;
pub mod user_repository;

pub use car_repository::CarRepository;
pub use laptop_repository::LaptopRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use car_repository::MockCarRepository;
#[cfg(test)]
pub use laptop_repository::MockLaptopRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
