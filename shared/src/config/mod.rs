//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and expiry configuration
//! - `environment` - Environment detection
//! - `server` - HTTP and gRPC listener configuration

pub mod auth;
pub mod environment;
pub mod server;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use environment::Environment;
pub use server::{GrpcConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment the service is running in
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// gRPC server configuration
    pub grpc: GrpcConfig,

    /// JWT configuration
    pub jwt: JwtConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            grpc: GrpcConfig::default(),
            jwt: JwtConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the complete configuration from environment variables
    ///
    /// Values not present in the environment fall back to development
    /// defaults. Called once at process start; the resulting object is
    /// immutable for the process lifetime.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            grpc: GrpcConfig::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}
