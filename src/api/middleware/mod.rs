//! HTTP middleware shared by the three services.

pub mod cors;
pub mod tracing;
