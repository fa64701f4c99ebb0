pub mod ledger;
pub mod memory;
pub mod ports;
pub mod types;

pub use ledger::{apply, deposit, fifo_consumption};
pub use memory::InMemoryBankingStore;
pub use ports::BankingStorePort;
pub use types::{ApplyOutcome, BankEntry, EntryApplication};
