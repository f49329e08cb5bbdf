//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Signing and verifying JWTs (codec)
//! - Issuing access/refresh token pairs (issuer)
//! - Validating presented access tokens (validator)
//!
//! All three components are protocol-agnostic; the HTTP and gRPC fronts
//! share the same instances.

mod codec;
mod config;
mod issuer;
mod validator;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use issuer::TokenIssuer;
pub use validator::TokenValidator;
