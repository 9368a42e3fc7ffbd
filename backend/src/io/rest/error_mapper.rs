//! Translation of domain errors into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use tracing::warn;

use crate::domain::models::AccountError;

impl AccountError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::AccountNotFound(_) => StatusCode::NOT_FOUND,
            AccountError::InvalidAccountNumber(_)
            | AccountError::InvalidWithdrawAmount(_)
            | AccountError::InvalidDepositAmount(_)
            | AccountError::InvalidAmountFormat(_)
            | AccountError::InsufficientFunds { .. }
            | AccountError::BalanceOverflow => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!("Request failed with {}: {:?}", status, self);

        let body = ErrorResponse::new(self.code(), self.to_string());
        (status, Json(body)).into_response()
    }
}
