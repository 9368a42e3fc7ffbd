//! # REST API Interface Layer
//!
//! HTTP endpoints for the ATM ledger. This layer handles:
//! - JSON request/response serialization
//! - Translation of `AccountError` into status codes and `ErrorResponse` bodies
//! - Request logging
//!
//! It contains no business logic; every rule lives in the domain layer.

pub mod account_apis;
pub mod error_mapper;

pub use account_apis::*;
