//! Request and response DTOs for the HTTP surface

pub mod auth_dto;

pub use auth_dto::{
    GenerateTokenQuery, TestTokenResponse, ValidateTokenRequest, ValidatedTokenResponse,
};
