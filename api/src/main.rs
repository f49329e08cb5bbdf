use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::{info, warn};
use tonic::transport::Server;

use auth_api::app::create_app;
use auth_api::grpc::proto::auth_service_server::AuthServiceServer;
use auth_api::grpc::AuthGrpcService;
use auth_api::routes::test::AppState;
use auth_core::domain::entities::identity::IdentityRecord;
use auth_core::repositories::InMemoryIdentityRepository;
use auth_core::services::token::{TokenCodec, TokenIssuer, TokenServiceConfig, TokenValidator};
use auth_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting auth-service");

    // Configuration is loaded exactly once; faults here are fatal
    let config = AppConfig::from_env();
    let token_config = TokenServiceConfig::from(&config.jwt);

    if config.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            anyhow::bail!("refusing to start in production with the default JWT secret");
        }
        warn!("using the default JWT secret; set JWT_SECRET before deploying");
    }

    let codec = Arc::new(TokenCodec::new(&token_config)?);

    // Provision the fixed test identity the smoke tests rely on
    let repository = InMemoryIdentityRepository::with_records(vec![IdentityRecord::new(
        "test_user_001",
        "testuser",
        "test@example.com",
        vec!["USER".to_string(), "TRADER".to_string()],
    )]);

    let issuer = Arc::new(TokenIssuer::new(repository, codec.clone(), token_config));
    let validator = Arc::new(TokenValidator::new(codec));

    let environment = config.environment;
    let state = web::Data::new(AppState {
        issuer: issuer.clone(),
        validator: validator.clone(),
    });

    let http_address = config.server.bind_address();
    info!(
        "HTTP server listening on {} (environment: {})",
        http_address, environment
    );

    let http_server = HttpServer::new(move || create_app(state.clone(), environment))
        .bind(&http_address)?
        .run();

    let grpc_address = config.grpc.bind_address().parse()?;
    info!("gRPC server listening on {}", grpc_address);

    let grpc_server = Server::builder()
        .timeout(Duration::from_secs(config.server.request_timeout))
        .add_service(AuthServiceServer::new(AuthGrpcService::new(
            issuer,
            validator,
            environment,
        )))
        .serve(grpc_address);

    tokio::try_join!(
        async { http_server.await.map_err(anyhow::Error::from) },
        async { grpc_server.await.map_err(anyhow::Error::from) },
    )?;

    Ok(())
}
