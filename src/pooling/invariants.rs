use std::collections::HashMap;

use crate::{
    error::{AccountingError, invalid_pool},
    types::ShipId,
};

/// Exit-condition pass over original vs final CBs, run after the transfer
/// sweep. Kept separate from the sweep: the sum precondition plus the greedy
/// order make violations unreachable for exact inputs, but zero-CB members
/// and float-edge pool sums are checked here per member anyway.
///
/// - a member that started in deficit must not end below its starting CB;
/// - a member that started in surplus must not end negative.
pub fn check_exit_conditions(
    original_cbs: &[(ShipId, f64)],
    final_cbs: &HashMap<&str, f64>,
) -> Result<(), AccountingError> {
    for (ship_id, original_cb) in original_cbs {
        let final_cb = final_cbs
            .get(ship_id.as_str())
            .copied()
            .unwrap_or(*original_cb);

        if *original_cb < 0.0 && final_cb < *original_cb {
            return Err(invalid_pool(format!(
                "deficit member '{}' would exit worse: before={}, after={}",
                ship_id, original_cb, final_cb
            )));
        }

        if *original_cb > 0.0 && final_cb < 0.0 {
            return Err(invalid_pool(format!(
                "surplus member '{}' would exit negative: before={}, after={}",
                ship_id, original_cb, final_cb
            )));
        }
    }

    Ok(())
}
