//! # Storage Module
//!
//! In-memory storage for accounts. Nothing here survives a restart.
//!
//! - **identifier_pool**: random, collision-free account number allocation
//! - **account_registry**: the single owner of every live account

pub mod account_registry;
pub mod identifier_pool;

pub use account_registry::AccountRegistry;
pub use identifier_pool::IdentifierPool;
