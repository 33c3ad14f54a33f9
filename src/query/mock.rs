//! Mock analytics client for testing.
//!
//! Returns canned data or canned failures per product without touching the
//! network, and records every query it receives.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::{QueryError, Result};
use crate::product::ProductType;
use crate::query::{AnalyticsClient, Query, QueryResult};

#[derive(Debug, Clone)]
enum CannedResponse {
    Data(Value),
    Failure(String),
}

/// In-memory stand-in for [`QueryExecutor`](crate::query::QueryExecutor).
///
/// Products without a canned response answer with an empty row list under
/// their root field.
#[derive(Debug, Default)]
pub struct MockAnalyticsClient {
    responses: HashMap<ProductType, CannedResponse>,
    received: Mutex<Vec<(ProductType, String)>>,
}

impl MockAnalyticsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers queries for `product` with the given `data` value.
    pub fn with_data(mut self, product: ProductType, data: Value) -> Self {
        self.responses.insert(product, CannedResponse::Data(data));
        self
    }

    /// Fails queries for `product` as a non-200 response with `body`.
    pub fn with_failure(mut self, product: ProductType, body: impl Into<String>) -> Self {
        self.responses
            .insert(product, CannedResponse::Failure(body.into()));
        self
    }

    /// Returns the (product, query text) pairs received so far.
    pub fn received(&self) -> Vec<(ProductType, String)> {
        self.received
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AnalyticsClient for MockAnalyticsClient {
    async fn execute(&self, query: &Query, _api_key: &str) -> Result<QueryResult> {
        let product = query.product();
        if let Ok(mut received) = self.received.lock() {
            received.push((product, query.text().to_string()));
        }

        match self.responses.get(&product) {
            Some(CannedResponse::Data(data)) => Ok(QueryResult::new(product, data.clone())),
            Some(CannedResponse::Failure(body)) => Err(QueryError::execution(body.clone())),
            None => {
                let mut data = Map::new();
                data.insert(product.root_field().to_string(), Value::Array(Vec::new()));
                Ok(QueryResult::new(product, Value::Object(data)))
            }
        }
    }
}
