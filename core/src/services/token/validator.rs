//! Token validator: verifies presented access tokens

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::token::{Claims, TokenType};
use crate::errors::ValidationError;

use super::codec::TokenCodec;

/// Validates opaque access token strings
///
/// Stateless beyond the shared read-only signing key; safe to call
/// concurrently with arbitrary overlap. Validation never mutates
/// anything.
pub struct TokenValidator {
    codec: Arc<TokenCodec>,
}

impl TokenValidator {
    /// Creates a new token validator
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// Validates an access token and returns its claims
    ///
    /// Delegates decoding to the codec, then requires the `type` claim
    /// to be `access`: a refresh token presented here is rejected with
    /// `WrongTokenType`, never silently accepted.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims of a valid access token
    /// * `Err(ValidationError)` - The typed rejection reason
    pub fn validate(&self, token: &str) -> Result<Claims, ValidationError> {
        let claims = self.codec.decode(token).map_err(|e| {
            warn!("token rejected: {}", e);
            e
        })?;

        if claims.token_type != TokenType::Access {
            warn!(jti = %claims.jti, "refresh token presented as access token");
            return Err(ValidationError::WrongTokenType);
        }

        debug!(user_id = %claims.sub, jti = %claims.jti, "token validated");
        Ok(claims)
    }
}
