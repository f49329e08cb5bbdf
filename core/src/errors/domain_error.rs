//! Domain-specific error types for token issuance and validation
//!
//! This module provides error types with bilingual support (English and
//! Chinese) for token encoding, decoding, and validation operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Configuration errors, fatal at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT signing secret is missing or empty | JWT签名密钥缺失或为空")]
    MissingSecret,

    #[error("Invalid token expiry configuration: {field} | 无效的令牌过期时间配置: {field}")]
    InvalidExpiry { field: &'static str },
}

/// Codec rejections with bilingual messages
///
/// The kinds are distinct and caller-visible: an expired token with a
/// valid signature is `Expired`, never `BadSignature`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Token expired | 令牌已过期")]
    Expired,

    #[error("Token signature verification failed | 令牌签名验证失败")]
    BadSignature,

    #[error("Invalid token format | 无效的令牌格式")]
    Malformed,
}

/// Validation rejections with bilingual messages
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Wrong token type: access token required | 令牌类型错误，需要Access Token")]
    WrongTokenType,
}

/// Umbrella error used at component boundaries
#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Token generation failed | 令牌生成失败")]
    TokenGenerationFailed,

    #[error("Internal error: {message} | 内部错误: {message}")]
    Internal { message: String },
}

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message (bilingual)
    pub message: String,
    /// Additional error details if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a single detail to the error response
    pub fn with_detail(mut self, key: impl ToString, value: serde_json::Value) -> Self {
        let mut details = self.details.unwrap_or_default();
        details.insert(key.to_string(), value);
        self.details = Some(details);
        self
    }
}

/// Convert DecodeError to ErrorResponse
impl From<DecodeError> for ErrorResponse {
    fn from(err: DecodeError) -> Self {
        let error_code = match &err {
            DecodeError::Expired => "TOKEN_EXPIRED",
            DecodeError::BadSignature => "INVALID_SIGNATURE",
            DecodeError::Malformed => "INVALID_TOKEN_FORMAT",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Decode(decode_err) => decode_err.into(),
            ValidationError::WrongTokenType => {
                ErrorResponse::new("WRONG_TOKEN_TYPE", err.to_string())
            }
        }
    }
}

/// Convert ConfigError to ErrorResponse
impl From<ConfigError> for ErrorResponse {
    fn from(err: ConfigError) -> Self {
        let error_code = match &err {
            ConfigError::MissingSecret => "MISSING_JWT_SECRET",
            ConfigError::InvalidExpiry { .. } => "INVALID_TOKEN_EXPIRY",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Config(e) => e.into(),
            AuthError::Decode(e) => e.into(),
            AuthError::Validation(e) => e.into(),
            AuthError::TokenGenerationFailed => {
                ErrorResponse::new("TOKEN_GENERATION_FAILED", err.to_string())
            }
            AuthError::Internal { .. } => ErrorResponse::new("INTERNAL_ERROR", err.to_string()),
        }
    }
}
