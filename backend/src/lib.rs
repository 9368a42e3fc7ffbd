//! # ATM Backend
//!
//! In-memory banking ledger served over HTTP.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (axum REST handlers)
//!     ↓
//! Domain Layer (AccountService, Account, AccountError)
//!     ↓
//! Storage Layer (AccountRegistry, IdentifierPool)
//! ```
//!
//! Nothing is persisted: every account lives in the registry owned by the
//! `AccountService` held in `AppState`.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::ServerConfig;
use crate::domain::AccountService;
use crate::storage::AccountRegistry;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub account_service: AccountService,
}

/// Build the services and seed the initial accounts
pub fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    info!("Setting up account registry");
    let account_service = AccountService::new(AccountRegistry::new());

    let seeded = account_service.seed_accounts(config.seed_accounts);
    for account in &seeded {
        info!("Seed account {} ready", account.account_number);
    }

    Ok(AppState { account_service })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    let account_routes = Router::new()
        .route("/newAccount", post(io::create_account))
        .route("/allAccounts", get(io::list_accounts))
        .route("/dropAllAccounts", delete(io::drop_all_accounts))
        .route("/:account_number/balance", get(io::get_balance))
        .route("/:account_number/withdraw", post(io::withdraw))
        .route("/:account_number/deposit", post(io::deposit))
        .route("/:account_number/delete", delete(io::delete_account));

    Router::new()
        .route("/health", get(io::health_check))
        .nest("/accounts", account_routes)
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_backend_seeds_accounts() {
        let config = ServerConfig {
            seed_accounts: 5,
            ..ServerConfig::default()
        };

        let state = initialize_backend(&config).unwrap();

        assert_eq!(state.account_service.list_accounts().len(), 5);
    }

    #[test]
    fn test_initialize_backend_without_seed() {
        let config = ServerConfig {
            seed_accounts: 0,
            ..ServerConfig::default()
        };

        let state = initialize_backend(&config).unwrap();

        assert!(state.account_service.list_accounts().is_empty());
    }
}
