//! # REST API for Accounts
//!
//! Balance, withdraw, deposit and account lifecycle endpoints. Handlers only
//! translate HTTP to `AccountService` calls; all validation happens there.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::models::AccountError;
use crate::AppState;

/// Unwrap an amount body, or build the error response for a bad one.
///
/// The account number is still checked first, so a bad id wins over a bad
/// body the same way it wins over a bad amount.
fn amount_or_error(
    state: &AppState,
    account_number: &str,
    body: Result<Json<Decimal>, JsonRejection>,
) -> Result<Decimal, Response> {
    match body {
        Ok(Json(amount)) => Ok(amount),
        Err(rejection) => {
            let error = match state.account_service.ensure_account(account_number) {
                Ok(_) => AccountError::InvalidAmountFormat(rejection.body_text()),
                Err(e) => e,
            };
            Err(error.into_response())
        }
    }
}

/// GET /accounts/:account_number/balance
pub async fn get_balance(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> impl IntoResponse {
    info!("GET /accounts/{}/balance", account_number);

    match state.account_service.get_balance(&account_number) {
        Ok(balance) => (StatusCode::OK, Json(balance)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST /accounts/:account_number/withdraw
pub async fn withdraw(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
    body: Result<Json<Decimal>, JsonRejection>,
) -> impl IntoResponse {
    let amount = match amount_or_error(&state, &account_number, body) {
        Ok(amount) => amount,
        Err(response) => return response,
    };
    info!("POST /accounts/{}/withdraw - amount: {}", account_number, amount);

    match state.account_service.withdraw(&account_number, amount) {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST /accounts/:account_number/deposit
pub async fn deposit(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
    body: Result<Json<Decimal>, JsonRejection>,
) -> impl IntoResponse {
    let amount = match amount_or_error(&state, &account_number, body) {
        Ok(amount) => amount,
        Err(response) => return response,
    };
    info!("POST /accounts/{}/deposit - amount: {}", account_number, amount);

    match state.account_service.deposit(&account_number, amount) {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST /accounts/newAccount
///
/// The body is an optional starting balance. A missing or unreadable body
/// opens the account with a zero balance.
pub async fn create_account(
    State(state): State<AppState>,
    body: Option<Json<Decimal>>,
) -> impl IntoResponse {
    let initial_balance = body.map(|Json(balance)| balance);
    info!("POST /accounts/newAccount - initial balance: {:?}", initial_balance);

    state.account_service.create_account(initial_balance);
    StatusCode::OK
}

/// GET /accounts/allAccounts
pub async fn list_accounts(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /accounts/allAccounts");

    (StatusCode::OK, Json(state.account_service.list_accounts()))
}

/// DELETE /accounts/:account_number/delete
pub async fn delete_account(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /accounts/{}/delete", account_number);

    match state.account_service.delete_account(&account_number) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => e.into_response(),
    }
}

/// DELETE /accounts/dropAllAccounts
pub async fn drop_all_accounts(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /accounts/dropAllAccounts");

    state.account_service.drop_all_accounts();
    StatusCode::OK
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json("OK")
}
