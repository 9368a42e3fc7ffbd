use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of a single live account as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Unique account number (unsigned 32-bit)
    pub account_number: u32,
    /// Current balance, serialized as a decimal string to keep exact precision
    pub balance: Decimal,
}

/// Error body returned by every failing account endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error category, e.g. "account_not_found"
    pub code: String,
    /// Human-readable explanation
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_summary_balance_keeps_precision() {
        let summary = AccountSummary {
            account_number: 42,
            balance: dec!(100.10),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["account_number"], 42);
        assert_eq!(json["balance"], "100.10");
    }

    #[test]
    fn test_account_summary_accepts_numeric_balance() {
        let summary: AccountSummary =
            serde_json::from_str(r#"{"account_number": 7, "balance": 12.5}"#).unwrap();
        assert_eq!(summary.balance, dec!(12.5));
    }

    #[test]
    fn test_error_response_shape() {
        let error = ErrorResponse::new("insufficient_funds", "Cannot authorize operation - insufficient funds.");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["code"], "insufficient_funds");
        assert!(json["detail"].as_str().unwrap().contains("insufficient funds"));
    }
}
