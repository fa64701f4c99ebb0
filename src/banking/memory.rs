use std::sync::RwLock;

use crate::{
    banking::{ports::BankingStorePort, types::BankEntry},
    error::{AccountingError, insufficient_banked, internal_error, not_found},
    types::Year,
};

/// In-memory banking ledger. Insertion order is creation order, which keeps
/// `entries_for` oldest-first without a sort.
#[derive(Default)]
pub struct InMemoryBankingStore {
    entries: RwLock<Vec<BankEntry>>,
}

impl InMemoryBankingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<T>(
        &self,
        f: impl FnOnce(&[BankEntry]) -> T,
    ) -> Result<T, AccountingError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| internal_error("banking store lock poisoned"))?;
        Ok(f(&entries))
    }
}

impl BankingStorePort for InMemoryBankingStore {
    fn insert(&self, entry: &BankEntry) -> Result<(), AccountingError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| internal_error("banking store lock poisoned"))?;
        entries.push(entry.clone());
        Ok(())
    }

    fn entries_for(&self, ship_id: &str, year: Year) -> Result<Vec<BankEntry>, AccountingError> {
        self.with_entries(|entries| {
            entries
                .iter()
                .filter(|e| e.ship_id == ship_id && e.year == year)
                .cloned()
                .collect()
        })
    }

    fn total_banked(&self, ship_id: &str, year: Year) -> Result<f64, AccountingError> {
        self.with_entries(|entries| {
            entries
                .iter()
                .filter(|e| e.ship_id == ship_id && e.year == year)
                .map(|e| e.amount_gco2eq)
                .sum()
        })
    }

    fn total_available(&self, ship_id: &str, year: Year) -> Result<f64, AccountingError> {
        self.with_entries(|entries| {
            entries
                .iter()
                .filter(|e| e.ship_id == ship_id && e.year == year)
                .map(|e| e.available())
                .sum()
        })
    }

    fn total_applied(&self, ship_id: &str, year: Year) -> Result<f64, AccountingError> {
        self.with_entries(|entries| {
            entries
                .iter()
                .filter(|e| e.ship_id == ship_id && e.year == year)
                .map(|e| e.applied_gco2eq)
                .sum()
        })
    }

    fn record_application(&self, entry_id: &str, amount: f64) -> Result<(), AccountingError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| internal_error("banking store lock poisoned"))?;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| not_found(format!("unknown bank entry '{}'", entry_id)))?;
        // Applied can never exceed banked on a single entry.
        if amount > entry.available() {
            return Err(insufficient_banked(format!(
                "bank entry '{}' has {} available, cannot apply {}",
                entry_id,
                entry.available(),
                amount
            )));
        }
        entry.applied_gco2eq += amount;
        Ok(())
    }
}
