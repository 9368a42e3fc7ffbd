//! Unique account number generation.
//!
//! Numbers are drawn uniformly over the whole `u32` range and redrawn while
//! they collide with a number that is still in use. Released numbers go back
//! into the pool and may be handed out again.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::domain::models::AccountNumber;

pub struct IdentifierPool<R = StdRng> {
    in_use: HashSet<AccountNumber>,
    rng: R,
}

impl IdentifierPool<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for IdentifierPool<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> IdentifierPool<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            in_use: HashSet::new(),
            rng,
        }
    }

    /// Draw a number that no live account holds and mark it as in use
    pub fn reserve_unique(&mut self) -> AccountNumber {
        loop {
            let candidate = self.rng.next_u32();
            if self.in_use.insert(candidate) {
                return candidate;
            }
            debug!("Account number {} already in use, drawing again", candidate);
        }
    }

    /// Return a number to the pool. Releasing a number twice is a no-op;
    /// the return value tells whether it was actually in use.
    pub fn release(&mut self, account_number: AccountNumber) -> bool {
        self.in_use.remove(&account_number)
    }

    pub fn contains(&self, account_number: AccountNumber) -> bool {
        self.in_use.contains(&account_number)
    }

    pub fn len(&self) -> usize {
        self.in_use.len()
    }

    pub fn clear(&mut self) {
        self.in_use.clear();
    }

    /// Snapshot of every number currently in use, in ascending order
    pub fn in_use(&self) -> Vec<AccountNumber> {
        let mut numbers: Vec<AccountNumber> = self.in_use.iter().copied().collect();
        numbers.sort_unstable();
        numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_reserve_skips_numbers_in_use() {
        // StepRng yields 1, 2, 3, ...
        let mut pool = IdentifierPool::with_rng(StepRng::new(1, 1));
        pool.in_use.insert(1);
        pool.in_use.insert(2);

        let reserved = pool.reserve_unique();

        assert_eq!(reserved, 3);
        assert!(pool.contains(3));
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_released_number_can_be_reused() {
        // Constant source: always proposes 9
        let mut pool = IdentifierPool::with_rng(StepRng::new(9, 0));

        assert_eq!(pool.reserve_unique(), 9);
        assert!(pool.release(9));
        assert!(!pool.contains(9));
        assert_eq!(pool.reserve_unique(), 9);
    }

    #[test]
    fn test_double_release_is_noop() {
        let mut pool = IdentifierPool::with_rng(StepRng::new(4, 1));
        let first = pool.reserve_unique();
        let second = pool.reserve_unique();

        assert!(pool.release(first));
        assert!(!pool.release(first));

        assert_eq!(pool.len(), 1);
        assert!(pool.contains(second));
    }

    #[test]
    fn test_many_reservations_are_unique() {
        let mut pool = IdentifierPool::with_rng(StdRng::seed_from_u64(7));
        let numbers: Vec<AccountNumber> = (0..1000).map(|_| pool.reserve_unique()).collect();

        let unique: HashSet<AccountNumber> = numbers.iter().copied().collect();
        assert_eq!(unique.len(), 1000);
        assert_eq!(pool.len(), 1000);
    }

    #[test]
    fn test_in_use_snapshot_is_sorted() {
        let mut pool = IdentifierPool::with_rng(StdRng::seed_from_u64(42));
        for _ in 0..20 {
            pool.reserve_unique();
        }

        let snapshot = pool.in_use();
        let mut sorted = snapshot.clone();
        sorted.sort();
        assert_eq!(snapshot, sorted);
        assert_eq!(snapshot.len(), 20);
    }
}
