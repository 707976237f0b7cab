//! Request and response bodies.
//!
//! Entities double as response bodies; only inputs and the health report get
//! their own types here. Inputs derive `validator::Validate`.

pub mod car;
pub mod health;
pub mod laptop;
pub mod user;

pub use car::CarRequest;
pub use health::{CheckStatus, HealthChecks, HealthResponse};
pub use laptop::LaptopRequest;
pub use user::UserRequest;
