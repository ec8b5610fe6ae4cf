//! In-memory currency store.
//!
//! The store is an explicitly constructed service object owning its data
//! and its lock; callers receive it via shared reference (the API layer
//! holds it in an `Arc` inside its state). One coarse mutex serializes
//! every operation, so all reads and mutations are totally ordered.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;

use crate::conversion::pivot_convert;
use crate::error::{ConvertError, StoreError};
use crate::types::Currency;

/// Ordered, lock-guarded collection of currency records.
///
/// Codes are not unique; operations that search by code act on the first
/// match in insertion order.
#[derive(Debug, Default)]
pub struct CurrencyStore {
    records: Mutex<Vec<Currency>>,
}

impl CurrencyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the store lock.
    ///
    /// A poisoned lock is recovered: every mutation here is a single `Vec`
    /// operation, so the data is never left half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<Currency>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of all records in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Currency> {
        self.lock().clone()
    }

    /// Appends a record and echoes it back.
    ///
    /// No duplicate-code check and no field validation: an empty code or a
    /// zero rate is stored as given.
    pub fn add(&self, currency: Currency) -> Currency {
        self.lock().push(currency.clone());
        currency
    }

    /// Replaces the first record whose code matches, in place.
    pub fn update(&self, updated: Currency) -> Result<Currency, StoreError> {
        let mut records = self.lock();
        match records.iter_mut().find(|c| c.code == updated.code) {
            Some(slot) => {
                *slot = updated.clone();
                Ok(updated)
            }
            None => Err(StoreError::NotFound(updated.code)),
        }
    }

    /// Removes the first record whose code matches, preserving the relative
    /// order of the remaining records.
    pub fn remove(&self, code: &str) -> Result<(), StoreError> {
        let mut records = self.lock();
        match records.iter().position(|c| c.code == code) {
            Some(index) => {
                records.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound(code.to_string())),
        }
    }

    /// Looks up the rate of the first record with the given code.
    #[must_use]
    pub fn rate_of(&self, code: &str) -> Option<Decimal> {
        first_rate(&self.lock(), code)
    }

    /// Converts `amount` from one stored currency to another via USD.
    ///
    /// Both lookups happen under a single lock acquisition. A code that is
    /// absent, or stored with a rate of exactly zero, fails the conversion;
    /// nothing is computed in that case.
    pub fn convert(&self, from: &str, to: &str, amount: Decimal) -> Result<Decimal, ConvertError> {
        let records = self.lock();
        let from_rate = first_rate(&records, from)
            .filter(|rate| !rate.is_zero())
            .ok_or_else(|| ConvertError::UnknownCurrency(from.to_string()))?;
        let to_rate = first_rate(&records, to)
            .filter(|rate| !rate.is_zero())
            .ok_or_else(|| ConvertError::UnknownCurrency(to.to_string()))?;
        Ok(pivot_convert(amount, from_rate, to_rate))
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// First-match linear scan for a code's rate.
fn first_rate(records: &[Currency], code: &str) -> Option<Decimal> {
    records.iter().find(|c| c.code == code).map(|c| c.rate)
}
