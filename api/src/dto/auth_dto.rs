use serde::{Deserialize, Serialize};
use validator::Validate;

use auth_core::domain::entities::token::Claims;

/// Query parameters for GET /test/generate-token
///
/// All parameters are optional; omitted ones fall back to the fixed
/// test identity.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateTokenQuery {
    #[serde(rename = "userId", default = "default_user_id")]
    pub user_id: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[validate(email)]
    #[serde(default = "default_email")]
    pub email: String,
}

fn default_user_id() -> String {
    String::from("test_user_001")
}

fn default_username() -> String {
    String::from("testuser")
}

fn default_email() -> String {
    String::from("test@example.com")
}

/// Response body for GET /test/generate-token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestTokenResponse {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub token_type: String,
    pub expires_in: i64,
    pub access_token: String,
    pub refresh_token: String,
}

/// Request body for POST /test/validate-token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenRequest {
    pub access_token: String,
}

/// Response body for POST /test/validate-token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedTokenResponse {
    pub valid: bool,
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    /// Expiry as a Unix timestamp in seconds
    pub expires_at: i64,
}

impl From<Claims> for ValidatedTokenResponse {
    fn from(claims: Claims) -> Self {
        Self {
            valid: true,
            user_id: claims.sub,
            username: claims.username,
            email: claims.email,
            roles: claims.roles,
            expires_at: claims.exp,
        }
    }
}
