use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::{ShipId, Year};

/// One deposit line in the banking ledger. Entries are never merged; the
/// applied amount only grows and never exceeds the banked amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankEntry {
    pub id: String,
    pub ship_id: ShipId,
    pub year: Year,
    /// Amount banked at deposit time (gCO2e), strictly positive.
    pub amount_gco2eq: f64,
    /// Portion consumed by later applies (gCO2e).
    pub applied_gco2eq: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl BankEntry {
    /// Remaining capacity of this ledger line.
    pub fn available(&self) -> f64 {
        self.amount_gco2eq - self.applied_gco2eq
    }
}

/// Result of applying banked surplus against a ship-year's CB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyOutcome {
    pub cb_before: f64,
    pub applied: f64,
    pub cb_after: f64,
}

/// One step of a FIFO consumption plan: how much to draw from which entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryApplication {
    pub entry_id: String,
    pub amount_gco2eq: f64,
}
