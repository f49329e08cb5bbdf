//! HTTP route handlers

pub mod test;

pub use test::AppState;
