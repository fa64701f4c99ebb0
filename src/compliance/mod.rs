pub mod calculator;
pub mod memory;
pub mod ports;
pub mod types;

pub use calculator::{ENERGY_MJ_PER_TONNE, calculate, target_intensity_for_year};
pub use memory::InMemoryComplianceStore;
pub use ports::ComplianceStorePort;
pub use types::{AdjustedComplianceBalance, ComplianceBalance};
