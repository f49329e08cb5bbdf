//! Test/debug route handlers
//!
//! These endpoints live under the `/test` namespace, separate from any
//! production issuance path, because they hand out tokens without
//! verifying a real credential:
//! - Health check
//! - Test token generation
//! - Token validation


use std::sync::Arc;

use auth_core::repositories::IdentityRepository;
use auth_core::services::token::{TokenIssuer, TokenValidator};

/// Application state that holds the shared token services
///
/// Both protocol fronts operate on the same issuer and validator
/// instances; the adapters only translate wire formats.
pub struct AppState<R: IdentityRepository> {
    pub issuer: Arc<TokenIssuer<R>>,
    pub validator: Arc<TokenValidator>,
}
