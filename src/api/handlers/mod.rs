//! HTTP request handlers, one module per service.

pub mod cars;
pub mod health;
pub mod laptops;
pub mod users;

pub use health::health_handler;
