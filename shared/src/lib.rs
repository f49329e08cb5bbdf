//! # Auth Shared
//!
//! Shared configuration types used across the authentication token service.
//! This crate holds no business logic; it only defines the typed
//! configuration consumed by the core and the API layers.

pub mod config;

pub use config::*;
