//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain. Routes are plain axum
//! handler functions; services reach them through the shared `AppState`.

pub mod rest;

pub use rest::*;
