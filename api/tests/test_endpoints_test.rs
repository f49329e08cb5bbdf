//! Integration tests for the HTTP test endpoints

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};

use auth_api::app::create_app;
use auth_api::dto::auth_dto::{TestTokenResponse, ValidateTokenRequest, ValidatedTokenResponse};
use auth_api::routes::test::AppState;
use auth_core::repositories::InMemoryIdentityRepository;
use auth_core::services::token::{TokenCodec, TokenIssuer, TokenServiceConfig, TokenValidator};
use auth_shared::config::Environment;

fn test_state() -> web::Data<AppState<InMemoryIdentityRepository>> {
    let config = TokenServiceConfig {
        jwt_secret: "integration-test-secret".to_string(),
        ..TokenServiceConfig::default()
    };
    let codec = Arc::new(TokenCodec::new(&config).expect("failed to create codec"));
    web::Data::new(AppState {
        issuer: Arc::new(TokenIssuer::new(
            InMemoryIdentityRepository::new(),
            codec.clone(),
            config,
        )),
        validator: Arc::new(TokenValidator::new(codec)),
    })
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(create_app(test_state(), Environment::Development)).await;

    let req = test::TestRequest::get().uri("/test/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "UP");
    assert_eq!(body["service"], "auth-service");
}

#[actix_web::test]
async fn test_generate_and_validate_roundtrip() {
    let app = test::init_service(create_app(test_state(), Environment::Development)).await;

    let req = test::TestRequest::get()
        .uri("/test/generate-token?userId=user123&username=zhangsan&email=zhangsan@example.com")
        .to_request();
    let token: TestTokenResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(token.user_id, "user123");
    assert_eq!(token.username, "zhangsan");
    assert_eq!(token.email, "zhangsan@example.com");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 900);
    assert_ne!(token.access_token, token.refresh_token);

    let req = test::TestRequest::post()
        .uri("/test/validate-token")
        .set_json(ValidateTokenRequest {
            access_token: token.access_token,
        })
        .to_request();
    let claims: ValidatedTokenResponse = test::call_and_read_body_json(&app, req).await;

    assert!(claims.valid);
    assert_eq!(claims.user_id, "user123");
    assert_eq!(claims.username, "zhangsan");
    assert_eq!(claims.email, "zhangsan@example.com");
    assert_eq!(claims.roles, vec!["USER"]);
}

#[actix_web::test]
async fn test_generate_token_defaults() {
    let app = test::init_service(create_app(test_state(), Environment::Development)).await;

    let req = test::TestRequest::get()
        .uri("/test/generate-token")
        .to_request();
    let token: TestTokenResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(token.user_id, "test_user_001");
    assert_eq!(token.username, "testuser");
    assert_eq!(token.email, "test@example.com");
}

#[actix_web::test]
async fn test_generate_token_rejects_invalid_email() {
    let app = test::init_service(create_app(test_state(), Environment::Development)).await;

    let req = test::TestRequest::get()
        .uri("/test/generate-token?email=not-an-email")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_REQUEST");
}

#[actix_web::test]
async fn test_validate_rejects_refresh_token() {
    let app = test::init_service(create_app(test_state(), Environment::Development)).await;

    let req = test::TestRequest::get()
        .uri("/test/generate-token")
        .to_request();
    let token: TestTokenResponse = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/test/validate-token")
        .set_json(ValidateTokenRequest {
            access_token: token.refresh_token,
        })
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "WRONG_TOKEN_TYPE");
}

#[actix_web::test]
async fn test_validate_rejects_tampered_token() {
    let app = test::init_service(create_app(test_state(), Environment::Development)).await;

    // Issued under a different signing key
    let foreign_config = TokenServiceConfig {
        jwt_secret: "some-other-secret".to_string(),
        ..TokenServiceConfig::default()
    };
    let foreign_codec = Arc::new(TokenCodec::new(&foreign_config).unwrap());
    let foreign_issuer = TokenIssuer::new(
        InMemoryIdentityRepository::new(),
        foreign_codec,
        foreign_config,
    );
    let pair = foreign_issuer
        .issue(&auth_core::domain::entities::identity::Identity::new(
            "user123",
            "zhangsan",
            "zhangsan@example.com",
        ))
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/test/validate-token")
        .set_json(ValidateTokenRequest {
            access_token: pair.access_token,
        })
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_SIGNATURE");
}

#[actix_web::test]
async fn test_validate_rejects_garbage() {
    let app = test::init_service(create_app(test_state(), Environment::Development)).await;

    let req = test::TestRequest::post()
        .uri("/test/validate-token")
        .set_json(ValidateTokenRequest {
            access_token: "garbage".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_TOKEN_FORMAT");
}

#[actix_web::test]
async fn test_generate_token_not_mounted_in_production() {
    let app = test::init_service(create_app(test_state(), Environment::Production)).await;

    let req = test::TestRequest::get()
        .uri("/test/generate-token")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Health stays available everywhere
    let req = test::TestRequest::get().uri("/test/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
