use std::sync::RwLock;

use crate::{
    error::{AccountingError, internal_error},
    pooling::{
        ports::PoolStorePort,
        types::{Pool, PoolMember},
    },
    types::Year,
};

#[derive(Default)]
pub struct InMemoryPoolStore {
    inner: RwLock<PoolRows>,
}

#[derive(Default)]
struct PoolRows {
    pools: Vec<Pool>,
    members: Vec<PoolMember>,
}

impl InMemoryPoolStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PoolStorePort for InMemoryPoolStore {
    fn insert(&self, pool: &Pool, members: &[PoolMember]) -> Result<(), AccountingError> {
        // Single lock write keeps header and members atomic.
        let mut rows = self
            .inner
            .write()
            .map_err(|_| internal_error("pool store lock poisoned"))?;
        rows.pools.push(pool.clone());
        rows.members.extend_from_slice(members);
        Ok(())
    }

    fn find_by_id(&self, pool_id: &str) -> Result<Option<Pool>, AccountingError> {
        let rows = self
            .inner
            .read()
            .map_err(|_| internal_error("pool store lock poisoned"))?;
        Ok(rows.pools.iter().find(|p| p.id == pool_id).cloned())
    }

    fn find_by_year(&self, year: Year) -> Result<Vec<Pool>, AccountingError> {
        let rows = self
            .inner
            .read()
            .map_err(|_| internal_error("pool store lock poisoned"))?;
        Ok(rows
            .pools
            .iter()
            .filter(|p| p.year == year)
            .cloned()
            .collect())
    }

    fn members_of(&self, pool_id: &str) -> Result<Vec<PoolMember>, AccountingError> {
        let rows = self
            .inner
            .read()
            .map_err(|_| internal_error("pool store lock poisoned"))?;
        Ok(rows
            .members
            .iter()
            .filter(|m| m.pool_id == pool_id)
            .cloned()
            .collect())
    }
}
