//! Account operations exposed to the IO layer.
//!
//! Every operation takes the raw account number string from the caller and
//! validates in a fixed order: number format, then existence, then amount
//! sign, then available funds. The first failing check decides the error
//! and no state is touched on failure.
//!
//! The registry sits behind a single mutex, so each check-then-mutate
//! sequence runs atomically and concurrent withdrawals cannot lose updates.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;
use shared::AccountSummary;
use tracing::{info, warn};

use crate::domain::models::{AccountError, AccountNumber};
use crate::storage::AccountRegistry;

#[derive(Clone)]
pub struct AccountService {
    registry: Arc<Mutex<AccountRegistry>>,
}

impl AccountService {
    pub fn new(registry: AccountRegistry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
        }
    }

    fn registry(&self) -> MutexGuard<'_, AccountRegistry> {
        // Operations never panic midway through a mutation, so a poisoned
        // lock still guards a consistent registry.
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Parse an externally supplied account number.
    ///
    /// Surrounding ASCII whitespace and a leading `+` are accepted. A leading
    /// `-` is accepted only for zero (`-0`, `-00`).
    pub fn parse_account_number(raw: &str) -> Result<AccountNumber, AccountError> {
        let invalid = || AccountError::InvalidAccountNumber(raw.to_string());
        let trimmed = raw.trim_matches(|c: char| matches!(c, '\t'..='\r' | ' '));

        match trimmed.strip_prefix('-') {
            Some(digits) if digits.starts_with(|c: char| c.is_ascii_digit()) => {
                match digits.parse::<AccountNumber>() {
                    Ok(0) => Ok(0),
                    _ => Err(invalid()),
                }
            }
            Some(_) => Err(invalid()),
            None => trimmed.parse::<AccountNumber>().map_err(|_| invalid()),
        }
    }

    /// Check format, then existence, without touching the account
    pub fn ensure_account(&self, raw_account_number: &str) -> Result<AccountNumber, AccountError> {
        let account_number = Self::parse_account_number(raw_account_number)?;
        self.registry().get(account_number)?;
        Ok(account_number)
    }

    /// Create `count` zero-balance accounts
    pub fn seed_accounts(&self, count: usize) -> Vec<AccountSummary> {
        let mut registry = self.registry();
        let created: Vec<AccountSummary> = (0..count)
            .map(|_| registry.create_account(Decimal::ZERO))
            .collect();
        info!("Seeded {} accounts", created.len());
        created
    }

    pub fn create_account(&self, initial_balance: Option<Decimal>) -> AccountSummary {
        self.registry()
            .create_account(initial_balance.unwrap_or(Decimal::ZERO))
    }

    pub fn account_exists(&self, account_number: AccountNumber) -> bool {
        self.registry().exists(account_number)
    }

    pub fn get_balance(&self, raw_account_number: &str) -> Result<Decimal, AccountError> {
        let account_number = Self::parse_account_number(raw_account_number)?;
        let registry = self.registry();
        let account = registry.get(account_number)?;
        Ok(account.balance())
    }

    /// Withdraw `amount` and return the new balance
    pub fn withdraw(&self, raw_account_number: &str, amount: Decimal) -> Result<Decimal, AccountError> {
        let account_number = Self::parse_account_number(raw_account_number)?;
        let mut registry = self.registry();
        let account = registry.get_mut(account_number)?;

        if amount < Decimal::ZERO {
            warn!("Rejected withdraw of {} from account {}", amount, account_number);
            return Err(AccountError::InvalidWithdrawAmount(amount));
        }
        if amount > account.balance() {
            warn!(
                "Insufficient funds in account {}: requested {}, available {}",
                account_number,
                amount,
                account.balance()
            );
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: account.balance(),
            });
        }

        account.withdraw_funds(amount);
        info!("Withdrew {} from account {}, balance now {}", amount, account_number, account.balance());
        Ok(account.balance())
    }

    /// Deposit `amount` and return the new balance
    pub fn deposit(&self, raw_account_number: &str, amount: Decimal) -> Result<Decimal, AccountError> {
        let account_number = Self::parse_account_number(raw_account_number)?;
        let mut registry = self.registry();
        let account = registry.get_mut(account_number)?;

        if amount < Decimal::ZERO {
            warn!("Rejected deposit of {} into account {}", amount, account_number);
            return Err(AccountError::InvalidDepositAmount(amount));
        }

        account.deposit_funds(amount)?;
        info!("Deposited {} into account {}, balance now {}", amount, account_number, account.balance());
        Ok(account.balance())
    }

    pub fn delete_account(&self, raw_account_number: &str) -> Result<(), AccountError> {
        let account_number = Self::parse_account_number(raw_account_number)?;
        self.registry().remove(account_number)?;
        Ok(())
    }

    /// Destroy every account. Returns how many were dropped.
    pub fn drop_all_accounts(&self) -> usize {
        self.registry().clear()
    }

    pub fn list_accounts(&self) -> Vec<AccountSummary> {
        self.registry().list()
    }

    /// Account numbers currently in use, ascending
    pub fn account_numbers(&self) -> Vec<AccountNumber> {
        self.registry().identifiers()
    }
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new(AccountRegistry::new())
    }
}
