//! Configuration for the token service

use auth_shared::config::JwtConfig;

use crate::errors::ConfigError;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret (HS256)
    pub jwt_secret: String,
    /// Issuer claim embedded in and required from every token
    pub issuer: String,
    /// Access token expiry in seconds
    pub access_token_expiry_seconds: i64,
    /// Refresh token expiry in seconds
    pub refresh_token_expiry_seconds: i64,
    /// Roles for identities the claims store does not know
    pub default_roles: Vec<String>,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            issuer: "auth-service".to_string(),
            access_token_expiry_seconds: 900,
            refresh_token_expiry_seconds: 604800,
            default_roles: vec!["USER".to_string()],
        }
    }
}

impl TokenServiceConfig {
    /// Checks the configuration for faults that must abort startup
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if self.access_token_expiry_seconds <= 0 {
            return Err(ConfigError::InvalidExpiry {
                field: "access_token_expiry_seconds",
            });
        }
        if self.refresh_token_expiry_seconds <= 0 {
            return Err(ConfigError::InvalidExpiry {
                field: "refresh_token_expiry_seconds",
            });
        }
        Ok(())
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            issuer: config.issuer.clone(),
            access_token_expiry_seconds: config.access_token_expiry,
            refresh_token_expiry_seconds: config.refresh_token_expiry,
            default_roles: config.default_roles.clone(),
        }
    }
}
