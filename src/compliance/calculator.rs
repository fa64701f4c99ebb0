use crate::{
    compliance::types::ComplianceBalance,
    types::{ShipId, Year},
};

/// Target GHG intensity for the 2025 regulatory period, gCO2e/MJ (2% below
/// the 91.16 reference value).
pub const TARGET_INTENSITY_2025: f64 = 89.3368;

/// Energy content per tonne of fuel, MJ.
pub const ENERGY_MJ_PER_TONNE: f64 = 41_000.0;

/// Per-year target lookup. A single governing value exists today; the
/// regulation tightens it in later periods.
pub fn target_intensity_for_year(_year: Year) -> f64 {
    TARGET_INTENSITY_2025
}

/// Derives a ship-year's compliance balance from measured intensity and
/// fuel consumption. Pure and idempotent; the caller persists the result.
pub fn calculate(
    ship_id: ShipId,
    year: Year,
    actual_intensity: f64,
    fuel_consumption_tonnes: f64,
) -> ComplianceBalance {
    let energy_in_scope = fuel_consumption_tonnes * ENERGY_MJ_PER_TONNE;
    let target_intensity = target_intensity_for_year(year);
    let cb_gco2eq = (target_intensity - actual_intensity) * energy_in_scope;

    ComplianceBalance {
        ship_id,
        year,
        cb_gco2eq,
        target_intensity,
        actual_intensity,
        energy_in_scope,
    }
}
