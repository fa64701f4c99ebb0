use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crate::{
    banking::ports::BankingStorePort,
    compliance::{
        ports::ComplianceStorePort,
        types::{AdjustedComplianceBalance, ComplianceBalance},
    },
    error::{AccountingError, internal_error},
    types::{ShipId, Year},
};

/// In-memory stand-in for the compliance table. The adjusted read consults
/// the banking store, mirroring the production SQL join.
pub struct InMemoryComplianceStore {
    balances: RwLock<HashMap<(ShipId, Year), ComplianceBalance>>,
    banking: Arc<dyn BankingStorePort>,
}

impl InMemoryComplianceStore {
    pub fn new(banking: Arc<dyn BankingStorePort>) -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
            banking,
        }
    }
}

impl ComplianceStorePort for InMemoryComplianceStore {
    fn upsert(&self, cb: &ComplianceBalance) -> Result<(), AccountingError> {
        let mut balances = self
            .balances
            .write()
            .map_err(|_| internal_error("compliance store lock poisoned"))?;
        balances.insert((cb.ship_id.clone(), cb.year), cb.clone());
        Ok(())
    }

    fn find(
        &self,
        ship_id: &str,
        year: Year,
    ) -> Result<Option<ComplianceBalance>, AccountingError> {
        let balances = self
            .balances
            .read()
            .map_err(|_| internal_error("compliance store lock poisoned"))?;
        Ok(balances.get(&(ship_id.to_string(), year)).cloned())
    }

    fn find_adjusted(
        &self,
        ship_id: &str,
        year: Year,
    ) -> Result<Option<AdjustedComplianceBalance>, AccountingError> {
        let Some(balance) = self.find(ship_id, year)? else {
            return Ok(None);
        };

        let applied = self.banking.total_applied(ship_id, year)?;
        let adjusted_cb = balance.cb_gco2eq + applied;

        Ok(Some(AdjustedComplianceBalance {
            balance,
            adjusted_cb,
        }))
    }
}
