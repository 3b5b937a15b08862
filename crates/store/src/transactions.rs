//! Transaction record store.

use std::sync::RwLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use finplan_core::ledger::{Category, Transaction};
use finplan_shared::types::TransactionId;

use crate::error::StoreError;
use crate::{read_lock, write_lock};

/// Input for recording a transaction.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Category.
    pub category: Category,
    /// Amount, non-negative (validated at the boundary).
    pub amount: Decimal,
    /// Calendar date.
    pub date: NaiveDate,
    /// Optional note.
    pub note: Option<String>,
}

/// In-memory transaction store, insertion-ordered.
#[derive(Debug, Default)]
pub struct TransactionStore {
    inner: RwLock<Vec<Transaction>>,
}

impl TransactionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new transaction and returns it.
    pub fn insert(&self, input: NewTransaction) -> Transaction {
        let tx = Transaction {
            id: TransactionId::new(),
            category: input.category,
            amount: input.amount,
            date: input.date,
            note: input.note,
        };
        write_lock(&self.inner).push(tx.clone());
        tx
    }

    /// Records an already-built transaction (e.g., a materialized goal
    /// contribution).
    pub fn insert_transaction(&self, tx: Transaction) {
        write_lock(&self.inner).push(tx);
    }

    /// Snapshot of all transactions, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Transaction> {
        read_lock(&self.inner).clone()
    }

    /// Deletes a transaction by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TransactionNotFound` when no transaction has the
    /// given ID.
    pub fn delete(&self, id: TransactionId) -> Result<(), StoreError> {
        let mut txs = write_lock(&self.inner);
        let before = txs.len();
        txs.retain(|tx| tx.id != id);

        if txs.len() == before {
            return Err(StoreError::TransactionNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_insert_and_list_preserve_order() {
        let store = TransactionStore::new();
        store.insert(NewTransaction {
            category: Category::Income,
            amount: dec!(5000),
            date: date(2024, 1, 2),
            note: None,
        });
        store.insert(NewTransaction {
            category: Category::Food,
            amount: dec!(120),
            date: date(2024, 1, 3),
            note: Some("groceries".into()),
        });

        let txs = store.list();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].category, Category::Income);
        assert_eq!(txs[1].note.as_deref(), Some("groceries"));
    }

    #[test]
    fn test_delete() {
        let store = TransactionStore::new();
        let tx = store.insert(NewTransaction {
            category: Category::Food,
            amount: dec!(50),
            date: date(2024, 1, 3),
            note: None,
        });

        assert!(store.delete(tx.id).is_ok());
        assert!(store.list().is_empty());
        assert_eq!(
            store.delete(tx.id),
            Err(StoreError::TransactionNotFound(tx.id))
        );
    }
}
