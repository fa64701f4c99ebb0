use crate::{
    compliance::calculator::target_intensity_for_year,
    error::{AccountingError, invalid_amount},
    routes::types::{Route, RouteComparison},
};

/// Relative GHG-intensity deviation of `comparison` against `baseline`,
/// plus a compliance flag against the regulatory target.
pub fn compare(baseline: &Route, comparison: &Route) -> Result<RouteComparison, AccountingError> {
    if baseline.ghg_intensity <= 0.0 {
        return Err(invalid_amount(format!(
            "baseline route '{}' has non-positive GHG intensity",
            baseline.route_id
        )));
    }

    let percent_diff = (comparison.ghg_intensity / baseline.ghg_intensity - 1.0) * 100.0;
    let compliant = comparison.ghg_intensity <= target_intensity_for_year(comparison.year);

    Ok(RouteComparison {
        route_id: comparison.route_id.clone(),
        baseline: baseline.clone(),
        comparison: comparison.clone(),
        percent_diff,
        compliant,
    })
}
