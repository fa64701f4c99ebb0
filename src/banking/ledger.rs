use crate::{
    banking::types::{ApplyOutcome, BankEntry, EntryApplication},
    clock::ClockPort,
    error::{AccountingError, insufficient_banked, invalid_amount},
    ids::IdGeneratorPort,
    types::{ShipId, Year},
};

/// Creates a new ledger line for a banked surplus. Only a strictly positive
/// balance may be banked; each deposit is its own entry.
pub fn deposit(
    ship_id: ShipId,
    year: Year,
    cb_amount: f64,
    ids: &dyn IdGeneratorPort,
    clock: &dyn ClockPort,
) -> Result<BankEntry, AccountingError> {
    if cb_amount <= 0.0 {
        return Err(invalid_amount(
            "cannot bank non-positive compliance balance",
        ));
    }

    Ok(BankEntry {
        id: ids.generate(),
        ship_id,
        year,
        amount_gco2eq: cb_amount,
        applied_gco2eq: 0.0,
        created_at: clock.now(),
    })
}

/// Applies banked surplus against the current CB. Banked surplus always
/// increases the CB; a deficit moves toward or through zero.
pub fn apply(
    current_cb: f64,
    available_banked: f64,
    amount_to_apply: f64,
) -> Result<ApplyOutcome, AccountingError> {
    if amount_to_apply <= 0.0 {
        return Err(invalid_amount("amount to apply must be positive"));
    }

    if amount_to_apply > available_banked {
        return Err(insufficient_banked(format!(
            "cannot apply more than available banked amount: requested={}, available={}",
            amount_to_apply, available_banked
        )));
    }

    Ok(ApplyOutcome {
        cb_before: current_cb,
        applied: amount_to_apply,
        cb_after: current_cb + amount_to_apply,
    })
}

/// Partitions `amount` across `entries` oldest-first: each entry contributes
/// up to its remaining capacity until the amount is fully allocated. The
/// partition is unique and deterministic for a given entry order.
///
/// The availability pre-check in `apply` guarantees the walk terminates with
/// nothing left over; the residual check here guards a stale snapshot.
pub fn fifo_consumption(
    entries: &[BankEntry],
    amount: f64,
) -> Result<Vec<EntryApplication>, AccountingError> {
    let mut remaining = amount;
    let mut plan = Vec::new();

    for entry in entries {
        if remaining <= 0.0 {
            break;
        }

        let capacity = entry.available();
        if capacity <= 0.0 {
            continue;
        }

        let to_apply = remaining.min(capacity);
        plan.push(EntryApplication {
            entry_id: entry.id.clone(),
            amount_gco2eq: to_apply,
        });
        remaining -= to_apply;
    }

    if remaining > 0.0 {
        return Err(insufficient_banked(format!(
            "ledger entries cover less than requested: uncovered={}",
            remaining
        )));
    }

    Ok(plan)
}
