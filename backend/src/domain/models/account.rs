use std::fmt;

use rust_decimal::Decimal;
use shared::AccountSummary;

/// Account numbers are unsigned 32-bit handles
pub type AccountNumber = u32;

/// A single account entry: its immutable number and its current balance.
///
/// Entries are only ever created by the registry, which owns the identifier
/// pool and guarantees the number is unique among live accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: AccountNumber,
    balance: Decimal,
}

impl Account {
    pub(crate) fn new(account_number: AccountNumber, balance: Decimal) -> Self {
        Self {
            account_number,
            balance,
        }
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Remove `amount` from the balance.
    ///
    /// This is a plain mutator: the caller must already have checked that
    /// `0 <= amount <= balance`. `AccountService::withdraw` does so in the
    /// order the API exposes to clients.
    pub fn withdraw_funds(&mut self, amount: Decimal) {
        self.balance -= amount;
    }

    /// Add `amount` to the balance. The caller checks `amount >= 0`.
    ///
    /// Fails only when the result would not fit in a `Decimal`, in which
    /// case the balance is left unchanged.
    pub fn deposit_funds(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow)?;
        Ok(())
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            account_number: self.account_number,
            balance: self.balance,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account Number: {}, Balance: {}",
            self.account_number, self.balance
        )
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccountError {
    #[error("Invalid account number format - must be an unsigned integer.")]
    InvalidAccountNumber(String),
    #[error("Account was not found.")]
    AccountNotFound(AccountNumber),
    #[error("Withdraw amount must be non-negative.")]
    InvalidWithdrawAmount(Decimal),
    #[error("Deposit amount must be non-negative.")]
    InvalidDepositAmount(Decimal),
    #[error("Invalid amount - must be a JSON decimal number.")]
    InvalidAmountFormat(String),
    #[error("Cannot authorize operation - insufficient funds.")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("Operation would overflow the account balance.")]
    BalanceOverflow,
}

impl AccountError {
    /// Stable machine-readable code for the error category
    pub fn code(&self) -> &'static str {
        match self {
            AccountError::InvalidAccountNumber(_) => "invalid_account_number",
            AccountError::AccountNotFound(_) => "account_not_found",
            AccountError::InvalidWithdrawAmount(_) => "invalid_withdraw_amount",
            AccountError::InvalidDepositAmount(_) => "invalid_deposit_amount",
            AccountError::InvalidAmountFormat(_) => "invalid_amount_format",
            AccountError::InsufficientFunds { .. } => "insufficient_funds",
            AccountError::BalanceOverflow => "balance_overflow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_withdraw_then_deposit_round_trip() {
        let mut account = Account::new(7, dec!(100));

        account.deposit_funds(dec!(12.34)).unwrap();
        account.withdraw_funds(dec!(12.34));

        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_deposit_overflow_leaves_balance_unchanged() {
        let mut account = Account::new(1, Decimal::MAX);

        let result = account.deposit_funds(dec!(1));

        assert_eq!(result, Err(AccountError::BalanceOverflow));
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn test_display_format() {
        let account = Account::new(12345, dec!(10.50));
        assert_eq!(account.to_string(), "Account Number: 12345, Balance: 10.50");
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            AccountError::InvalidAccountNumber("abc".to_string()),
            AccountError::AccountNotFound(1),
            AccountError::InvalidWithdrawAmount(dec!(-1)),
            AccountError::InvalidDepositAmount(dec!(-1)),
            AccountError::InvalidAmountFormat("x".to_string()),
            AccountError::InsufficientFunds {
                requested: dec!(2),
                available: dec!(1),
            },
            AccountError::BalanceOverflow,
        ];

        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_withdraw_and_deposit_messages_differ() {
        let withdraw = AccountError::InvalidWithdrawAmount(dec!(-5)).to_string();
        let deposit = AccountError::InvalidDepositAmount(dec!(-5)).to_string();
        assert_ne!(withdraw, deposit);
    }
}
