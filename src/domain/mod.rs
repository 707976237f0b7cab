//! Domain layer containing business entities and collaborator contracts.
//!
//! It defines entities, repository interfaces and remote-client interfaces
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Entity store trait definitions
//! - [`clients`] - Sibling-service client trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])

pub mod clients;
pub mod entities;
pub mod repositories;
