use crate::{error::AccountingError, routes::types::Route};

pub trait RouteStorePort: Send + Sync {
    fn insert(&self, route: &Route) -> Result<(), AccountingError>;

    /// All routes, ordered by year then route_id.
    fn find_all(&self) -> Result<Vec<Route>, AccountingError>;

    fn find_by_id(&self, id: &str) -> Result<Option<Route>, AccountingError>;

    fn find_by_route_id(&self, route_id: &str) -> Result<Option<Route>, AccountingError>;

    /// The current baseline route, if one is set.
    fn find_baseline(&self) -> Result<Option<Route>, AccountingError>;

    /// Makes `route_id` the baseline, clearing every other baseline of the
    /// same year in the same step.
    fn set_baseline(&self, route_id: &str) -> Result<(), AccountingError>;
}
