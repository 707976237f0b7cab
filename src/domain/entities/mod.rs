//! Core domain entities.
//!
//! Each service owns exactly one entity type:
//!
//! - [`User`] - user service
//! - [`Car`] - car service
//! - [`Laptop`] - laptop service
//!
//! Entities double as the JSON wire format exchanged between services
//! (camelCase field names). `NewUser`, `NewCar` and `NewLaptop` carry the
//! caller-supplied fields for create and full-replace edits.

pub mod car;
pub mod laptop;
pub mod user;

pub use car::{Car, NewCar};
pub use laptop::{Laptop, NewLaptop};
pub use user::{NewUser, User};
