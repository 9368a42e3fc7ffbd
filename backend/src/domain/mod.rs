//! # Domain Module
//!
//! Business rules for the ATM ledger.
//!
//! - **models**: the `Account` entry and the `AccountError` taxonomy
//! - **account_service**: balance, withdraw, deposit and account lifecycle
//!   operations with their validation order
//!
//! ## Business Rules
//!
//! - Account numbers are unique among live accounts and may be reused after
//!   an account is deleted
//! - Withdraw and deposit amounts must be non-negative
//! - A withdrawal may not exceed the current balance
//! - A failed operation never changes any balance

pub mod account_service;
pub mod models;

pub use account_service::*;
pub use models::*;
