//! Domain layer: entities embedded in and returned from tokens

pub mod entities;

pub use entities::*;
