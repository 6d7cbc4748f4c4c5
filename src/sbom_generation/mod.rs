//! Domain layer: the BOM model and the pure services that build it
pub mod domain;
pub mod services;
