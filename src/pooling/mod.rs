pub mod allocator;
pub mod invariants;
pub mod memory;
pub mod ports;
pub mod types;

pub use allocator::create_pool;
pub use invariants::check_exit_conditions;
pub use memory::InMemoryPoolStore;
pub use ports::PoolStorePort;
pub use types::{Pool, PoolAllocation, PoolMember};
