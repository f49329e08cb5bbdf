//! Error types for token operations
//!
//! The taxonomy separates fatal startup faults from per-request
//! rejections:
//! - `ConfigError` - startup-only; the process must not start
//! - `DecodeError` - per-request codec rejections, returned to the caller
//! - `ValidationError` - decode rejections plus token-type mismatches
//! - `AuthError` - umbrella error at component boundaries

pub mod domain_error;

pub use domain_error::{AuthError, ConfigError, DecodeError, ErrorResponse, ValidationError};
