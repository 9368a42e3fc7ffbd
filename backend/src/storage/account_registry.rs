//! # Account Registry
//!
//! In-memory owner of every live account. Accounts are keyed by account
//! number in a `BTreeMap`, so listings come out in ascending order. The
//! identifier pool tracks exactly the same set of numbers as the map's keys.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::RngCore;
use rust_decimal::Decimal;
use shared::AccountSummary;
use tracing::info;

use crate::domain::models::{Account, AccountError, AccountNumber};
use crate::storage::identifier_pool::IdentifierPool;

pub struct AccountRegistry<R = StdRng> {
    accounts: BTreeMap<AccountNumber, Account>,
    identifiers: IdentifierPool<R>,
}

impl AccountRegistry<StdRng> {
    pub fn new() -> Self {
        Self::with_identifier_pool(IdentifierPool::new())
    }
}

impl Default for AccountRegistry<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> AccountRegistry<R> {
    pub fn with_identifier_pool(identifiers: IdentifierPool<R>) -> Self {
        Self {
            accounts: BTreeMap::new(),
            identifiers,
        }
    }

    /// Create an account with a fresh number and the given starting balance
    pub fn create_account(&mut self, initial_balance: Decimal) -> AccountSummary {
        let account_number = self.identifiers.reserve_unique();
        let account = Account::new(account_number, initial_balance);
        let summary = account.summary();
        self.accounts.insert(account_number, account);

        info!("Created account {} with balance {}", account_number, initial_balance);
        summary
    }

    pub fn exists(&self, account_number: AccountNumber) -> bool {
        self.identifiers.contains(account_number)
    }

    pub fn get(&self, account_number: AccountNumber) -> Result<&Account, AccountError> {
        self.accounts
            .get(&account_number)
            .ok_or(AccountError::AccountNotFound(account_number))
    }

    pub fn get_mut(&mut self, account_number: AccountNumber) -> Result<&mut Account, AccountError> {
        self.accounts
            .get_mut(&account_number)
            .ok_or(AccountError::AccountNotFound(account_number))
    }

    /// Destroy an account: drop its entry and release its number
    pub fn remove(&mut self, account_number: AccountNumber) -> Result<Account, AccountError> {
        let account = self
            .accounts
            .remove(&account_number)
            .ok_or(AccountError::AccountNotFound(account_number))?;
        self.identifiers.release(account_number);

        info!("Deleted account {}", account_number);
        Ok(account)
    }

    /// Destroy every account. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.accounts.len();
        self.accounts.clear();
        self.identifiers.clear();

        info!("Dropped {} accounts", dropped);
        dropped
    }

    /// Snapshot of all accounts in ascending account-number order
    pub fn list(&self) -> Vec<AccountSummary> {
        self.accounts.values().map(Account::summary).collect()
    }

    pub fn identifiers(&self) -> Vec<AccountNumber> {
        self.identifiers.in_use()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
