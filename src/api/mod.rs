//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - request bodies and the health report
//! - [`extract`] - extractors rendering rejections as `{"message"}`
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - tracing and CORS layers
//! - [`routes`] - per-service route tables

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
