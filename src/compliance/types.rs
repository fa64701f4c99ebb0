use serde::{Deserialize, Serialize};

use crate::types::{ShipId, Year};

/// A ship-year's standing against its GHG-intensity target. Positive
/// `cb_gco2eq` is surplus, negative is deficit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceBalance {
    pub ship_id: ShipId,
    pub year: Year,
    /// Compliance balance in gCO2e.
    pub cb_gco2eq: f64,
    /// Target GHG intensity (gCO2e/MJ).
    pub target_intensity: f64,
    /// Actual GHG intensity (gCO2e/MJ).
    pub actual_intensity: f64,
    /// Energy in scope (MJ).
    pub energy_in_scope: f64,
}

/// CB plus the net banked surplus applied to the ship-year so far. Derived
/// on read from the base CB and the banking ledger, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedComplianceBalance {
    pub balance: ComplianceBalance,
    pub adjusted_cb: f64,
}
