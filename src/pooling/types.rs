use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::{ShipId, Year};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: String,
    pub year: Year,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolMember {
    pub pool_id: String,
    pub ship_id: ShipId,
    pub cb_before: f64,
    pub cb_after: f64,
}

/// Outcome of a pool-formation attempt. On rejection `valid` is false, the
/// id is empty and `members` is empty; `pool_sum` is always reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolAllocation {
    pub pool_id: String,
    pub members: Vec<PoolMember>,
    pub pool_sum: f64,
    pub valid: bool,
}

impl PoolAllocation {
    pub(crate) fn rejected(pool_sum: f64) -> Self {
        Self {
            pool_id: String::new(),
            members: Vec::new(),
            pool_sum,
            valid: false,
        }
    }
}
