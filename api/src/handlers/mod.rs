//! Error-to-response translation for the HTTP surface

pub mod error_handler;

pub use error_handler::{handle_auth_error, handle_validation_error};
