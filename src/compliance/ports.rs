use crate::{
    compliance::types::{AdjustedComplianceBalance, ComplianceBalance},
    error::AccountingError,
    types::Year,
};

pub trait ComplianceStorePort: Send + Sync {
    /// Insert or overwrite the CB for (ship, year).
    fn upsert(&self, cb: &ComplianceBalance) -> Result<(), AccountingError>;

    fn find(
        &self,
        ship_id: &str,
        year: Year,
    ) -> Result<Option<ComplianceBalance>, AccountingError>;

    /// Base CB plus the sum of applied banking for the ship-year.
    fn find_adjusted(
        &self,
        ship_id: &str,
        year: Year,
    ) -> Result<Option<AdjustedComplianceBalance>, AccountingError>;
}
