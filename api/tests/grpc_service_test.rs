//! Tests for the gRPC service adapter

use std::sync::Arc;

use tonic::{Code, Request};

use auth_api::grpc::proto::auth_service_server::AuthService;
use auth_api::grpc::proto::{HealthRequest, IssueTestTokenRequest, ValidateTokenRequest};
use auth_api::grpc::AuthGrpcService;
use auth_core::repositories::InMemoryIdentityRepository;
use auth_core::services::token::{TokenCodec, TokenIssuer, TokenServiceConfig, TokenValidator};
use auth_shared::config::Environment;

fn create_service(environment: Environment) -> AuthGrpcService<InMemoryIdentityRepository> {
    let config = TokenServiceConfig {
        jwt_secret: "grpc-test-secret".to_string(),
        ..TokenServiceConfig::default()
    };
    let codec = Arc::new(TokenCodec::new(&config).expect("failed to create codec"));
    AuthGrpcService::new(
        Arc::new(TokenIssuer::new(
            InMemoryIdentityRepository::new(),
            codec.clone(),
            config,
        )),
        Arc::new(TokenValidator::new(codec)),
        environment,
    )
}

#[tokio::test]
async fn test_grpc_health() {
    let service = create_service(Environment::Development);

    let response = service
        .health(Request::new(HealthRequest {}))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.status, "UP");
    assert_eq!(response.service, "auth-service");
}

#[tokio::test]
async fn test_grpc_issue_and_validate_roundtrip() {
    let service = create_service(Environment::Development);

    let issued = service
        .issue_test_token(Request::new(IssueTestTokenRequest {
            user_id: "user123".to_string(),
            username: "zhangsan".to_string(),
            email: "zhangsan@example.com".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(issued.token_type, "Bearer");
    assert_eq!(issued.expires_in, 900);
    assert_ne!(issued.access_token, issued.refresh_token);

    let validated = service
        .validate_token(Request::new(ValidateTokenRequest {
            access_token: issued.access_token,
        }))
        .await
        .unwrap()
        .into_inner();

    assert!(validated.valid);
    assert!(validated.error_message.is_empty());
    assert_eq!(validated.user_id, "user123");
    assert_eq!(validated.username, "zhangsan");
    assert_eq!(validated.email, "zhangsan@example.com");
    assert_eq!(validated.roles, vec!["USER"]);
    assert!(validated.expires_at > 0);
}

#[tokio::test]
async fn test_grpc_issue_applies_default_identity() {
    let service = create_service(Environment::Development);

    let issued = service
        .issue_test_token(Request::new(IssueTestTokenRequest::default()))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(issued.user_id, "test_user_001");
    assert_eq!(issued.username, "testuser");
    assert_eq!(issued.email, "test@example.com");
}

#[tokio::test]
async fn test_grpc_validate_rejects_refresh_token() {
    let service = create_service(Environment::Development);

    let issued = service
        .issue_test_token(Request::new(IssueTestTokenRequest::default()))
        .await
        .unwrap()
        .into_inner();

    let validated = service
        .validate_token(Request::new(ValidateTokenRequest {
            access_token: issued.refresh_token,
        }))
        .await
        .unwrap()
        .into_inner();

    assert!(!validated.valid);
    assert!(validated.error_message.contains("access token required"));
}

#[tokio::test]
async fn test_grpc_validate_rejects_empty_token() {
    let service = create_service(Environment::Development);

    let validated = service
        .validate_token(Request::new(ValidateTokenRequest {
            access_token: String::new(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert!(!validated.valid);
    assert!(!validated.error_message.is_empty());
}

#[tokio::test]
async fn test_grpc_validate_reports_rejection_in_band() {
    let service = create_service(Environment::Development);

    // Rejections come back as valid=false, not as a transport error
    let validated = service
        .validate_token(Request::new(ValidateTokenRequest {
            access_token: "not-a-jwt".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert!(!validated.valid);
    assert!(validated.error_message.contains("Invalid token format"));
}

#[tokio::test]
async fn test_grpc_issue_disabled_in_production() {
    let service = create_service(Environment::Production);

    let status = service
        .issue_test_token(Request::new(IssueTestTokenRequest::default()))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::FailedPrecondition);
}
