use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    banking::{
        ledger,
        ports::BankingStorePort,
        types::{ApplyOutcome, BankEntry},
    },
    clock::ClockPort,
    compliance::{
        calculator,
        ports::ComplianceStorePort,
        types::{AdjustedComplianceBalance, ComplianceBalance},
    },
    error::{AccountingError, invalid_amount, invalid_pool, not_found},
    ids::IdGeneratorPort,
    pooling::{
        allocator,
        ports::PoolStorePort,
        types::{Pool, PoolAllocation, PoolMember},
    },
    routes::{
        comparator,
        ports::RouteStorePort,
        types::{Route, RouteComparison},
    },
    types::{ShipId, Year},
};

/// Caller-facing operation surface over the accounting engines and storage
/// ports. Every operation is synchronous and deterministic for a given
/// snapshot; serializing concurrent writers per (ship, year) is the
/// caller's responsibility.
pub struct AccountingFacade {
    routes: Arc<dyn RouteStorePort>,
    compliance: Arc<dyn ComplianceStorePort>,
    banking: Arc<dyn BankingStorePort>,
    pools: Arc<dyn PoolStorePort>,
    ids: Arc<dyn IdGeneratorPort>,
    clock: Arc<dyn ClockPort>,
}

impl AccountingFacade {
    pub fn new(
        routes: Arc<dyn RouteStorePort>,
        compliance: Arc<dyn ComplianceStorePort>,
        banking: Arc<dyn BankingStorePort>,
        pools: Arc<dyn PoolStorePort>,
        ids: Arc<dyn IdGeneratorPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            routes,
            compliance,
            banking,
            pools,
            ids,
            clock,
        }
    }

    /// Computes and upserts the CB for (ship, year) from supplied telemetry.
    pub fn calculate_cb(
        &self,
        ship_id: &str,
        year: Year,
        actual_intensity: f64,
        fuel_consumption: f64,
    ) -> Result<ComplianceBalance, AccountingError> {
        let cb = calculator::calculate(
            ship_id.to_string(),
            year,
            actual_intensity,
            fuel_consumption,
        );
        self.compliance.upsert(&cb)?;
        debug!(ship_id, year, cb_gco2eq = cb.cb_gco2eq, "compliance balance computed");
        Ok(cb)
    }

    /// Computes the CB from the ship's recorded route telemetry.
    pub fn calculate_cb_for_route(
        &self,
        ship_id: &str,
        year: Year,
    ) -> Result<ComplianceBalance, AccountingError> {
        let route = self
            .routes
            .find_by_route_id(ship_id)?
            .ok_or_else(|| not_found(format!("route '{}' not found", ship_id)))?;
        self.calculate_cb(ship_id, year, route.ghg_intensity, route.fuel_consumption)
    }

    pub fn compliance_balance(
        &self,
        ship_id: &str,
        year: Year,
    ) -> Result<ComplianceBalance, AccountingError> {
        self.compliance
            .find(ship_id, year)?
            .ok_or_else(|| missing_cb(ship_id, year))
    }

    pub fn adjusted_cb(
        &self,
        ship_id: &str,
        year: Year,
    ) -> Result<AdjustedComplianceBalance, AccountingError> {
        self.compliance
            .find_adjusted(ship_id, year)?
            .ok_or_else(|| missing_cb(ship_id, year))
    }

    /// Banks surplus CB. Without an explicit amount the full current CB is
    /// deposited; the CB must be positive either way.
    pub fn deposit(
        &self,
        ship_id: &str,
        year: Year,
        amount: Option<f64>,
    ) -> Result<BankEntry, AccountingError> {
        let cb = self.compliance_balance(ship_id, year)?;

        // A ship with no surplus has nothing to bank, whatever amount was
        // requested.
        if cb.cb_gco2eq <= 0.0 {
            return Err(invalid_amount(
                "cannot bank non-positive compliance balance",
            ));
        }

        let bank_amount = amount.unwrap_or(cb.cb_gco2eq);
        let entry = ledger::deposit(
            ship_id.to_string(),
            year,
            bank_amount,
            self.ids.as_ref(),
            self.clock.as_ref(),
        )?;
        self.banking.insert(&entry)?;

        info!(ship_id, year, amount = bank_amount, "surplus banked");
        Ok(entry)
    }

    /// Applies banked surplus against the ship-year's CB: availability check,
    /// FIFO consumption of the ledger entries, then CB upsert.
    pub fn apply_banked(
        &self,
        ship_id: &str,
        year: Year,
        amount: f64,
    ) -> Result<ApplyOutcome, AccountingError> {
        let cb = self.compliance_balance(ship_id, year)?;
        let available = self.banking.total_available(ship_id, year)?;

        let outcome = ledger::apply(cb.cb_gco2eq, available, amount)?;

        // Consumption starts only after the availability check above.
        let entries = self.banking.entries_for(ship_id, year)?;
        let plan = ledger::fifo_consumption(&entries, amount)?;
        for application in &plan {
            self.banking
                .record_application(&application.entry_id, application.amount_gco2eq)?;
        }

        let updated = ComplianceBalance {
            cb_gco2eq: outcome.cb_after,
            ..cb
        };
        self.compliance.upsert(&updated)?;

        info!(
            ship_id,
            year,
            applied = outcome.applied,
            cb_after = outcome.cb_after,
            "banked surplus applied"
        );
        Ok(outcome)
    }

    /// Ledger lines for (ship, year), oldest first.
    pub fn bank_records(&self, ship_id: &str, year: Year) -> Result<Vec<BankEntry>, AccountingError> {
        self.banking.entries_for(ship_id, year)
    }

    /// Forms a pool over the ships' adjusted CBs for `year`. Rejection maps
    /// to an `InvalidPool` error; a valid pool is persisted atomically with
    /// its members.
    pub fn create_pool(
        &self,
        year: Year,
        ship_ids: &[ShipId],
    ) -> Result<PoolAllocation, AccountingError> {
        let mut member_cbs: Vec<(ShipId, f64)> = Vec::with_capacity(ship_ids.len());
        for ship_id in ship_ids {
            let adjusted = self
                .compliance
                .find_adjusted(ship_id, year)?
                .ok_or_else(|| missing_cb(ship_id, year))?;
            member_cbs.push((ship_id.clone(), adjusted.adjusted_cb));
        }

        let allocation = allocator::create_pool(year, &member_cbs, self.ids.as_ref());
        if !allocation.valid {
            return Err(invalid_pool(format!(
                "pool rejected: sum of CBs must be >= 0 and exit conditions must hold (pool_sum={})",
                allocation.pool_sum
            )));
        }

        let pool = Pool {
            id: allocation.pool_id.clone(),
            year,
            created_at: self.clock.now(),
        };
        self.pools.insert(&pool, &allocation.members)?;

        info!(
            pool_id = %pool.id,
            year,
            members = allocation.members.len(),
            pool_sum = allocation.pool_sum,
            "pool created"
        );
        Ok(allocation)
    }

    pub fn pools_for_year(&self, year: Year) -> Result<Vec<Pool>, AccountingError> {
        self.pools.find_by_year(year)
    }

    pub fn pool_members(&self, pool_id: &str) -> Result<Vec<PoolMember>, AccountingError> {
        self.pools.members_of(pool_id)
    }

    pub fn routes(&self) -> Result<Vec<Route>, AccountingError> {
        self.routes.find_all()
    }

    pub fn set_baseline(&self, route_id: &str) -> Result<(), AccountingError> {
        self.routes.set_baseline(route_id)
    }

    /// Compares every non-baseline route against the current baseline.
    pub fn compare_routes(&self) -> Result<Vec<RouteComparison>, AccountingError> {
        let baseline = self
            .routes
            .find_baseline()?
            .ok_or_else(|| not_found("no baseline route found"))?;

        let mut comparisons = Vec::new();
        for route in self.routes.find_all()? {
            if route.id == baseline.id {
                continue;
            }
            comparisons.push(comparator::compare(&baseline, &route)?);
        }
        Ok(comparisons)
    }
}

fn missing_cb(ship_id: &str, year: Year) -> AccountingError {
    not_found(format!(
        "compliance balance not found for ship '{}' in {}",
        ship_id, year
    ))
}
