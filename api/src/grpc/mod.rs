//! gRPC service exposing token validation and test issuance

pub mod auth_service;

pub mod proto {
    tonic::include_proto!("auth.v1");
}

pub use auth_service::AuthGrpcService;
