//! Token issuer: builds access/refresh token pairs

use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{Claims, TokenPair, TokenType};
use crate::errors::AuthError;
use crate::repositories::IdentityRepository;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// Issues token pairs for caller-supplied identities
///
/// Roles are resolved through the claims store when the identity is
/// provisioned there; otherwise the configured default roles are
/// embedded so issuance works for arbitrary identities.
pub struct TokenIssuer<R: IdentityRepository> {
    repository: R,
    codec: Arc<TokenCodec>,
    config: TokenServiceConfig,
}

impl<R: IdentityRepository> TokenIssuer<R> {
    /// Creates a new token issuer
    pub fn new(repository: R, codec: Arc<TokenCodec>, config: TokenServiceConfig) -> Self {
        Self {
            repository,
            codec,
            config,
        }
    }

    /// Issues an access/refresh token pair for the given identity
    ///
    /// Both tokens are produced in one issuance event: they share the
    /// identity fields and a correlation id, while carrying independent
    /// token ids and expiries. No partial pair is ever observable.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The issued pair with `token_type = "Bearer"`
    ///   and `expires_in` set to the access token TTL
    /// * `Err(AuthError)` - Signing failed or the claims store errored
    pub async fn issue(&self, identity: &Identity) -> Result<TokenPair, AuthError> {
        let roles = match self.repository.find_by_user_id(&identity.user_id).await? {
            Some(record) => record.roles,
            None => self.config.default_roles.clone(),
        };

        let correlation_id = Uuid::new_v4().to_string();

        let access_claims = Claims::new(
            identity,
            roles.clone(),
            TokenType::Access,
            &self.config.issuer,
            self.config.access_token_expiry_seconds,
            correlation_id.clone(),
        );
        let refresh_claims = Claims::new(
            identity,
            roles,
            TokenType::Refresh,
            &self.config.issuer,
            self.config.refresh_token_expiry_seconds,
            correlation_id,
        );

        let access_token = self.codec.encode(&access_claims)?;
        let refresh_token = self.codec.encode(&refresh_claims)?;

        debug!(
            user_id = %identity.user_id,
            jti = %access_claims.jti,
            "issued token pair"
        );

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_seconds,
        ))
    }
}
