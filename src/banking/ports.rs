use crate::{banking::types::BankEntry, error::AccountingError, types::Year};

pub trait BankingStorePort: Send + Sync {
    /// Append-only insert of a deposit line.
    fn insert(&self, entry: &BankEntry) -> Result<(), AccountingError>;

    /// All ledger lines for (ship, year), oldest first.
    fn entries_for(&self, ship_id: &str, year: Year) -> Result<Vec<BankEntry>, AccountingError>;

    /// Sum of banked amounts for (ship, year).
    fn total_banked(&self, ship_id: &str, year: Year) -> Result<f64, AccountingError>;

    /// Sum of (banked - applied) for (ship, year).
    fn total_available(&self, ship_id: &str, year: Year) -> Result<f64, AccountingError>;

    /// Sum of applied amounts for (ship, year).
    fn total_applied(&self, ship_id: &str, year: Year) -> Result<f64, AccountingError>;

    /// Bump one entry's applied amount by `amount`.
    fn record_application(&self, entry_id: &str, amount: f64) -> Result<(), AccountingError>;
}
