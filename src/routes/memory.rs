use std::sync::RwLock;

use crate::{
    error::{AccountingError, internal_error, not_found},
    routes::{ports::RouteStorePort, types::Route},
};

#[derive(Default)]
pub struct InMemoryRouteStore {
    routes: RwLock<Vec<Route>>,
}

impl InMemoryRouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self {
            routes: RwLock::new(routes),
        }
    }
}

impl RouteStorePort for InMemoryRouteStore {
    fn insert(&self, route: &Route) -> Result<(), AccountingError> {
        let mut routes = self
            .routes
            .write()
            .map_err(|_| internal_error("route store lock poisoned"))?;
        routes.push(route.clone());
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<Route>, AccountingError> {
        let routes = self
            .routes
            .read()
            .map_err(|_| internal_error("route store lock poisoned"))?;
        let mut all: Vec<Route> = routes.clone();
        all.sort_by(|a, b| (a.year, &a.route_id).cmp(&(b.year, &b.route_id)));
        Ok(all)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Route>, AccountingError> {
        let routes = self
            .routes
            .read()
            .map_err(|_| internal_error("route store lock poisoned"))?;
        Ok(routes.iter().find(|r| r.id == id).cloned())
    }

    fn find_by_route_id(&self, route_id: &str) -> Result<Option<Route>, AccountingError> {
        let routes = self
            .routes
            .read()
            .map_err(|_| internal_error("route store lock poisoned"))?;
        Ok(routes.iter().find(|r| r.route_id == route_id).cloned())
    }

    fn find_baseline(&self) -> Result<Option<Route>, AccountingError> {
        let routes = self
            .routes
            .read()
            .map_err(|_| internal_error("route store lock poisoned"))?;
        Ok(routes.iter().find(|r| r.is_baseline).cloned())
    }

    fn set_baseline(&self, route_id: &str) -> Result<(), AccountingError> {
        let mut routes = self
            .routes
            .write()
            .map_err(|_| internal_error("route store lock poisoned"))?;

        let year = routes
            .iter()
            .find(|r| r.route_id == route_id)
            .map(|r| r.year)
            .ok_or_else(|| not_found(format!("route '{}' not found", route_id)))?;

        // Clear the year's other baselines and set the new one under the
        // same write lock.
        for route in routes.iter_mut() {
            if route.year == year {
                route.is_baseline = route.route_id == route_id;
            }
        }

        Ok(())
    }
}
