//! Application factory
//!
//! Builds the actix-web application over an already-constructed
//! [`AppState`]; the binary and the integration tests share this
//! factory.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::routes::test::{
    generate_token::generate_token, health::health, validate_token::validate_token, AppState,
};

use auth_core::repositories::IdentityRepository;
use auth_shared::config::Environment;

/// Create and configure the application
///
/// The test issuance route hands out tokens without credential
/// verification, so it is mounted only outside production. Health and
/// validation stay available everywhere.
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
    environment: Environment,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: IdentityRepository + 'static,
{
    let test_scope = web::scope("/test")
        .route("/health", web::get().to(health))
        .route("/validate-token", web::post().to(validate_token::<R>));

    let test_scope = if environment.is_production() {
        test_scope
    } else {
        test_scope.route("/generate-token", web::get().to(generate_token::<R>))
    };

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .service(test_scope)
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
