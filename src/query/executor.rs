//! HTTP execution of built queries.
//!
//! Sends a single POST to the product's GraphQL endpoint and turns the
//! response into a [`QueryResult`] or a [`QueryError`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{QueryError, Result};
use crate::product::{ProductType, DEFAULT_BASE_URL};
use crate::query::{AnalyticsClient, Query, QueryResult};

/// Executes queries against the analytics API over HTTP.
///
/// Uses the transport's default timeouts and never retries.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    base_url: String,
    client: Client,
}

impl QueryExecutor {
    /// Creates an executor for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Creates an executor for the public API.
    pub fn with_default_url() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the endpoint a query for `product` is sent to.
    pub fn endpoint_for(&self, product: ProductType) -> String {
        product.endpoint(&self.base_url)
    }

    /// Interprets a response status and body.
    fn handle_response(
        product: ProductType,
        status: StatusCode,
        body: &str,
    ) -> Result<QueryResult> {
        if status != StatusCode::OK {
            return Err(QueryError::execution(body));
        }

        let response: GraphqlResponse = serde_json::from_str(body)
            .map_err(|e| QueryError::InvalidResponse(format!("{e}: {body}")))?;

        let errors: Vec<String> = response
            .errors
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.message)
            .collect();
        for message in &errors {
            warn!("GraphQL error from {}: {}", product.root_field(), message);
        }

        Ok(QueryResult::new(product, response.data).with_errors(errors))
    }
}

#[async_trait]
impl AnalyticsClient for QueryExecutor {
    async fn execute(&self, query: &Query, api_key: &str) -> Result<QueryResult> {
        let product = query.product();
        let url = self.endpoint_for(product);
        debug!("Sending {} to {}", product.query_name(), url);

        let request = GraphqlRequest {
            query: query.text(),
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Token {api_key}"))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", url, e);
                QueryError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Response from {}: {}", url, status);

        if status != StatusCode::OK {
            warn!("Query against {} failed with {}", url, status);
        }

        Self::handle_response(product, status, &body)
    }
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Value,
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}
