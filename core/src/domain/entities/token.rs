//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::identity::Identity;

/// Token type reported alongside issued pairs (RFC 6750)
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

/// Discriminates access tokens from refresh tokens inside the claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived credential authorizing API calls
    Access,
    /// Long-lived credential used to obtain a new access token
    Refresh,
}

impl TokenType {
    /// String form as embedded in the `type` claim
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Claims structure for the JWT payload
///
/// Created at issuance and never mutated afterwards; a claim set becomes
/// logically invalid once its `exp` timestamp passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Display username
    pub username: String,

    /// Email address
    pub email: String,

    /// Roles granted to the subject
    pub roles: Vec<String>,

    /// Whether this is an access or a refresh token
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Issuer
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Correlation ID shared by both tokens of one issuance
    pub cid: String,
}

impl Claims {
    /// Creates new claims for one half of a token pair
    ///
    /// # Arguments
    ///
    /// * `identity` - The identity embedded in the token
    /// * `roles` - Roles granted to the subject
    /// * `token_type` - Access or refresh
    /// * `issuer` - Issuer claim value
    /// * `expiry_seconds` - Lifetime of the token in seconds
    /// * `correlation_id` - Issuance correlation id shared by the pair
    pub fn new(
        identity: &Identity,
        roles: Vec<String>,
        token_type: TokenType,
        issuer: &str,
        expiry_seconds: i64,
        correlation_id: String,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: identity.user_id.clone(),
            username: identity.username.clone(),
            email: identity.email.clone(),
            roles,
            token_type,
            iss: issuer.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
            cid: correlation_id,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// The identity embedded in the claims
    pub fn identity(&self) -> Identity {
        Identity::new(&self.sub, &self.username, &self.email)
    }
}

/// Token pair returned to the client
///
/// Always produced atomically: no issuance ever yields only one half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Token type ("Bearer")
    pub token_type: String,

    /// Access token expiry time in seconds
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: BEARER_TOKEN_TYPE.to_string(),
            expires_in,
        }
    }
}
