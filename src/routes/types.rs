use serde::{Deserialize, Serialize};

use crate::types::Year;

/// A ship-year's measured route performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub route_id: String,
    pub vessel_type: String,
    pub fuel_type: String,
    pub year: Year,
    /// gCO2e/MJ.
    pub ghg_intensity: f64,
    /// Tonnes.
    pub fuel_consumption: f64,
    /// Nautical miles.
    pub distance: f64,
    /// Tonnes CO2e.
    pub total_emissions: f64,
    pub is_baseline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteComparison {
    pub route_id: String,
    pub baseline: Route,
    pub comparison: Route,
    pub percent_diff: f64,
    pub compliant: bool,
}
