//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs. Each service only ever builds
//! the repository for its own table.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - `users` table (user service)
//! - [`PgCarRepository`] - `cars` table (car service)
//! - [`PgLaptopRepository`] - `laptops` table (laptop service)

pub mod pg_car_repository;
pub mod pg_laptop_repository;
pub mod pg_user_repository;

pub use pg_car_repository::PgCarRepository;
pub use pg_laptop_repository::PgLaptopRepository;
pub use pg_user_repository::PgUserRepository;
