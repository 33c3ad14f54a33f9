//! Error types for realtime-query.
//!
//! Defines the main error enum used throughout the application.

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for query building and execution.
#[derive(Error, Debug)]
pub enum QueryError {
    /// A product type string that does not name Events or Metrics.
    #[error("Invalid product type: {0}")]
    InvalidProductType(String),

    /// No fields were selected.
    #[error("At least one field must be selected")]
    EmptyFieldSelection,

    /// The start date is after the end date.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// A field that is not part of the product's catalog.
    #[error("Unknown field '{field}' for {product}")]
    UnknownField { product: String, field: String },

    /// The API answered with a non-200 status. Carries the raw response body.
    #[error("GraphQL query failed: {0}")]
    QueryExecution(String),

    /// Connection refused, DNS failure, timeout and similar.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered 200 but the body was not valid JSON.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration errors (invalid config file, bad CLI input, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure writing results.
    #[error("I/O error: {0}")]
    Io(String),
}

impl QueryError {
    /// Creates a query execution error with the given response body.
    pub fn execution(body: impl Into<String>) -> Self {
        Self::QueryExecution(body.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an I/O error with the given message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidProductType(_) => "Invalid Product Type",
            Self::EmptyFieldSelection
            | Self::InvalidDateRange { .. }
            | Self::UnknownField { .. } => "Invalid Input",
            Self::QueryExecution(_) => "Query Execution Error",
            Self::Transport(_) => "Transport Error",
            Self::InvalidResponse(_) => "Invalid Response",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
        }
    }
}

/// Result type alias using QueryError.
pub type Result<T> = std::result::Result<T, QueryError>;
