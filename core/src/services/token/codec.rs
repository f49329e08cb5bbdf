//! Token codec: signs and verifies JWTs

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{AuthError, ConfigError, DecodeError};

use super::config::TokenServiceConfig;

/// Signs (encodes) and verifies (decodes) tokens with a process-wide key
///
/// The key material is derived from configuration exactly once at
/// construction and is read-only afterwards; no hot reload. Both
/// operations are pure over their input and the key, so a single codec
/// instance is shared by issuer and validator without locking.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material is deliberately omitted from the debug output.
        f.debug_struct("TokenCodec").finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Creates a codec from the token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenCodec`, or a `ConfigError` when the signing key or
    /// expiry configuration is unusable. Configuration faults are fatal
    /// at startup, never per-request.
    pub fn new(config: &TokenServiceConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        // Expiry is exact: a token one second past `exp` is expired
        validation.leeway = 0;

        Ok(Self {
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Encodes claims into a signed JWT
    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenGenerationFailed)
    }

    /// Decodes a token string, verifying signature, issuer, and expiry
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The token is structurally valid, correctly
    ///   signed, and not expired
    /// * `Err(DecodeError::Expired)` - Valid signature, `exp` in the past
    /// * `Err(DecodeError::BadSignature)` - Signature verification failed
    /// * `Err(DecodeError::Malformed)` - Any other structural or claim
    ///   fault
    pub fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => DecodeError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => DecodeError::BadSignature,
                _ => DecodeError::Malformed,
            })
    }
}
