//! Business services

pub mod token;

pub use token::{TokenCodec, TokenIssuer, TokenServiceConfig, TokenValidator};
