pub mod comparator;
pub mod memory;
pub mod ports;
pub mod types;

pub use comparator::compare;
pub use memory::InMemoryRouteStore;
pub use ports::RouteStorePort;
pub use types::{Route, RouteComparison};
