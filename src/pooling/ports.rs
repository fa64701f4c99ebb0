use crate::{
    error::AccountingError,
    pooling::types::{Pool, PoolMember},
    types::Year,
};

pub trait PoolStorePort: Send + Sync {
    /// Persist a pool header and its members as one unit.
    fn insert(&self, pool: &Pool, members: &[PoolMember]) -> Result<(), AccountingError>;

    fn find_by_id(&self, pool_id: &str) -> Result<Option<Pool>, AccountingError>;

    fn find_by_year(&self, year: Year) -> Result<Vec<Pool>, AccountingError>;

    fn members_of(&self, pool_id: &str) -> Result<Vec<PoolMember>, AccountingError>;
}
