pub mod route_catalog;
pub mod route_client;
pub mod safety;

pub use route_client::RouteClient;

use crate::error::Result;
use crate::models::{Route, RouteQuery};
use async_trait::async_trait;

/// Anything that can answer a route search.
#[async_trait]
pub trait RouteSource: Send + Sync {
    async fn find_routes(&self, query: &RouteQuery) -> Result<Vec<Route>>;
}
