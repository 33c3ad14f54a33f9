//! Analytics products that can be queried.
//!
//! Every per-product constant (root field, query name, endpoint path and
//! field catalog) hangs off [`ProductType`], so they can never be mixed
//! between products.

mod catalog;

pub use catalog::{EVENTS_FIELDS, METRICS_FIELDS};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Default base URL of the analytics API.
pub const DEFAULT_BASE_URL: &str = "https://api.azionapi.net";

/// Analytics dataset a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// Raw event log stream.
    #[default]
    Events,
    /// Aggregated metrics.
    Metrics,
}

impl ProductType {
    /// All products, in display order.
    pub const ALL: [ProductType; 2] = [ProductType::Events, ProductType::Metrics];

    /// Returns the human-readable product label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Events => "Real-time Events",
            Self::Metrics => "Real-time Metrics",
        }
    }

    /// Returns the GraphQL root field queried for this product.
    pub fn root_field(&self) -> &'static str {
        match self {
            Self::Events => "httpEvents",
            Self::Metrics => "httpMetrics",
        }
    }

    /// Returns the GraphQL operation name used for this product.
    pub fn query_name(&self) -> &'static str {
        match self {
            Self::Events => "EventsQuery",
            Self::Metrics => "MetricsQuery",
        }
    }

    /// Returns the endpoint path, relative to the API base URL.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Self::Events => "/events/graphql",
            Self::Metrics => "/metrics/graphql",
        }
    }

    /// Returns the full endpoint URL under the given base URL.
    pub fn endpoint(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.endpoint_path())
    }

    /// Returns the fields that can be selected for this product.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::Events => EVENTS_FIELDS,
            Self::Metrics => METRICS_FIELDS,
        }
    }

    /// Returns true if `field` is in this product's catalog.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields().contains(&field)
    }

    /// Returns the field selected when the caller picks none.
    pub fn default_field(&self) -> &'static str {
        self.fields()[0]
    }
}

impl FromStr for ProductType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "events" | "httpevents" | "real-time events" => Ok(Self::Events),
            "metrics" | "httpmetrics" | "real-time metrics" => Ok(Self::Metrics),
            _ => Err(QueryError::InvalidProductType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
