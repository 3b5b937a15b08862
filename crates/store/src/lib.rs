//! In-memory record stores for Finplan.
//!
//! The engine in `finplan-core` is pure: it computes views over explicit
//! input snapshots. This crate owns the authoritative records (transactions,
//! budget limits, goals and their contributions) and hands out consistent
//! snapshots per request. Each store guards its collection with a lock, so a
//! computation always sees one coherent state.
//!
//! Persistence mechanics are deliberately not part of the system contract;
//! these stores are the in-process stand-in for whatever durable layer a
//! deployment wires up.

pub mod budgets;
pub mod error;
pub mod goals;
pub mod transactions;

pub use budgets::BudgetStore;
pub use error::StoreError;
pub use goals::{GoalStore, NewGoal};
pub use transactions::{NewTransaction, TransactionStore};

use std::sync::{PoisonError, RwLockReadGuard, RwLockWriteGuard};

/// Recovers the guard from a poisoned read lock; the stored collections are
/// plain data, valid regardless of a panicking earlier writer.
pub(crate) fn read_lock<T>(
    lock: &std::sync::RwLock<T>,
) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write-lock counterpart of [`read_lock`].
pub(crate) fn write_lock<T>(
    lock: &std::sync::RwLock<T>,
) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
