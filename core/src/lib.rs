//! # Auth Core
//!
//! Core business logic and domain layer for the authentication token
//! service. This crate contains the domain entities, the token codec,
//! issuer and validator services, the claims store interface, and the
//! error types shared by every protocol front.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
