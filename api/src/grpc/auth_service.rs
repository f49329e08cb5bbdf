//! gRPC adapter over the shared issuer and validator

use std::sync::Arc;
use tonic::{Request, Response, Status};

use auth_core::domain::entities::identity::Identity;
use auth_core::repositories::IdentityRepository;
use auth_core::services::token::{TokenIssuer, TokenValidator};
use auth_shared::config::Environment;

use super::proto::auth_service_server::AuthService;
use super::proto::{
    HealthRequest, HealthResponse, IssueTestTokenRequest, IssueTestTokenResponse,
    ValidateTokenRequest, ValidateTokenResponse,
};

/// gRPC implementation of `auth.v1.AuthService`
///
/// A thin adapter: all business logic lives in the shared issuer and
/// validator, identical to the HTTP surface.
pub struct AuthGrpcService<R: IdentityRepository> {
    issuer: Arc<TokenIssuer<R>>,
    validator: Arc<TokenValidator>,
    environment: Environment,
}

impl<R: IdentityRepository> AuthGrpcService<R> {
    /// Creates a new gRPC service over the shared token components
    pub fn new(
        issuer: Arc<TokenIssuer<R>>,
        validator: Arc<TokenValidator>,
        environment: Environment,
    ) -> Self {
        Self {
            issuer,
            validator,
            environment,
        }
    }
}

#[tonic::async_trait]
impl<R: IdentityRepository + 'static> AuthService for AuthGrpcService<R> {
    async fn health(
        &self,
        _request: Request<HealthRequest>,
    ) -> Result<Response<HealthResponse>, Status> {
        Ok(Response::new(HealthResponse {
            status: "UP".to_string(),
            service: "auth-service".to_string(),
            message: "Service is running".to_string(),
        }))
    }

    async fn issue_test_token(
        &self,
        request: Request<IssueTestTokenRequest>,
    ) -> Result<Response<IssueTestTokenResponse>, Status> {
        if self.environment.is_production() {
            return Err(Status::failed_precondition(
                "test token issuance is disabled in production",
            ));
        }

        let req = request.into_inner();
        // Same fallback identity as the HTTP surface
        let identity = Identity::new(
            non_empty_or(req.user_id, "test_user_001"),
            non_empty_or(req.username, "testuser"),
            non_empty_or(req.email, "test@example.com"),
        );

        match self.issuer.issue(&identity).await {
            Ok(pair) => Ok(Response::new(IssueTestTokenResponse {
                access_token: pair.access_token,
                refresh_token: pair.refresh_token,
                token_type: pair.token_type,
                expires_in: pair.expires_in,
                user_id: identity.user_id,
                username: identity.username,
                email: identity.email,
            })),
            Err(error) => {
                log::error!("test token issuance failed: {:?}", error);
                Err(Status::internal("token generation failed"))
            }
        }
    }

    async fn validate_token(
        &self,
        request: Request<ValidateTokenRequest>,
    ) -> Result<Response<ValidateTokenResponse>, Status> {
        let req = request.into_inner();

        if req.access_token.is_empty() {
            return Ok(Response::new(ValidateTokenResponse {
                valid: false,
                error_message: "Token must not be empty | Token不能为空".to_string(),
                ..Default::default()
            }));
        }

        // Rejections are reported in-band; transport-level errors are
        // reserved for transport faults
        match self.validator.validate(&req.access_token) {
            Ok(claims) => Ok(Response::new(ValidateTokenResponse {
                valid: true,
                user_id: claims.sub,
                username: claims.username,
                email: claims.email,
                roles: claims.roles,
                expires_at: claims.exp,
                error_message: String::new(),
            })),
            Err(error) => Ok(Response::new(ValidateTokenResponse {
                valid: false,
                error_message: error.to_string(),
                ..Default::default()
            })),
        }
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
