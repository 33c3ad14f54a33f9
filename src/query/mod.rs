//! Query building and execution.
//!
//! [`build_query`] renders the GraphQL document; an [`AnalyticsClient`]
//! sends it and returns the response data.

pub mod builder;
pub mod executor;
pub mod mock;
pub mod result;

pub use builder::{
    build_query, DateRange, FieldSelection, Filter, FilterValue, Query, FETCH_LIMIT,
};
pub use executor::QueryExecutor;
pub use mock::MockAnalyticsClient;
pub use result::QueryResult;

use async_trait::async_trait;

use crate::error::Result;

/// Trait for clients that can run a built query.
///
/// The endpoint is always derived from the query's own product.
#[async_trait]
pub trait AnalyticsClient: Send + Sync {
    /// Sends `query` authenticated with `api_key` and returns the `data`
    /// object of the response.
    async fn execute(&self, query: &Query, api_key: &str) -> Result<QueryResult>;
}
