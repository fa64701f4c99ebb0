use std::{cmp::Ordering, collections::HashMap};

use crate::{
    ids::IdGeneratorPort,
    pooling::{
        invariants::check_exit_conditions,
        types::{PoolAllocation, PoolMember},
    },
    types::{ShipId, Year},
};

/// Computes a pool redistribution over the members' CBs, or rejects the
/// pool. `member_cbs` is ordered; ties in the CB-descending sort keep input
/// order (stable sort), which is what makes the allocation reproducible.
pub fn create_pool(
    _year: Year,
    member_cbs: &[(ShipId, f64)],
    ids: &dyn IdGeneratorPort,
) -> PoolAllocation {
    let pool_sum: f64 = member_cbs.iter().map(|(_, cb)| cb).sum();

    // A pool can never itself be in collective deficit.
    if pool_sum < 0.0 {
        return PoolAllocation::rejected(pool_sum);
    }

    let mut sorted: Vec<(&str, f64)> = member_cbs
        .iter()
        .map(|(ship_id, cb)| (ship_id.as_str(), *cb))
        .collect();
    sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    // Zero-CB members sit on neither side of the transfer.
    let mut surpluses: Vec<(&str, f64)> = sorted
        .iter()
        .filter(|(_, cb)| *cb > 0.0)
        .map(|(ship_id, cb)| (*ship_id, *cb))
        .collect();
    let deficits: Vec<(&str, f64)> = sorted
        .iter()
        .filter(|(_, cb)| *cb < 0.0)
        .map(|(ship_id, cb)| (*ship_id, -cb))
        .collect();

    let mut final_cbs: HashMap<&str, f64> = member_cbs
        .iter()
        .map(|(ship_id, cb)| (ship_id.as_str(), *cb))
        .collect();

    // Single merge-style sweep: fill each deficit from the current surplus
    // member, advancing whichever side is exhausted.
    let mut surplus_index = 0;
    for (deficit_ship, mut deficit) in deficits {
        while deficit > 0.0 && surplus_index < surpluses.len() {
            let (surplus_ship, surplus) = &mut surpluses[surplus_index];
            let transfer = deficit.min(*surplus);

            *final_cbs.entry(deficit_ship).or_default() += transfer;
            *final_cbs.entry(*surplus_ship).or_default() -= transfer;

            deficit -= transfer;
            *surplus -= transfer;

            if *surplus == 0.0 {
                surplus_index += 1;
            }
        }
    }

    if check_exit_conditions(member_cbs, &final_cbs).is_err() {
        return PoolAllocation::rejected(pool_sum);
    }

    let pool_id = ids.generate();
    let members = member_cbs
        .iter()
        .map(|(ship_id, original_cb)| PoolMember {
            pool_id: pool_id.clone(),
            ship_id: ship_id.clone(),
            cb_before: *original_cb,
            cb_after: final_cbs[ship_id.as_str()],
        })
        .collect();

    PoolAllocation {
        pool_id,
        members,
        pool_sum,
        valid: true,
    }
}
