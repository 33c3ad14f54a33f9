//! Result data returned by the analytics API.

use serde_json::Value;

use crate::error::{QueryError, Result};
use crate::product::ProductType;

/// The `data` object of a successful response.
///
/// Keyed by the product's root field, e.g. `{"httpEvents": [...]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    product: ProductType,
    data: Value,
    errors: Vec<String>,
}

impl QueryResult {
    /// Creates a result for `product` with no GraphQL errors attached.
    pub fn new(product: ProductType, data: Value) -> Self {
        Self {
            product,
            data,
            errors: Vec::new(),
        }
    }

    /// Attaches GraphQL error messages that came back alongside the data.
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    pub fn product(&self) -> ProductType {
        self.product
    }

    /// Returns the raw `data` value.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// GraphQL `errors[].message` entries from the response, if any.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns the rows under the product's root field, if it is an array.
    pub fn rows(&self) -> Option<&Vec<Value>> {
        self.data.get(self.product.root_field())?.as_array()
    }

    /// Returns true when there is nothing worth showing.
    ///
    /// That is a null `data`, an empty object, or an object whose values
    /// are all null or empty arrays.
    pub fn is_empty(&self) -> bool {
        match &self.data {
            Value::Null => true,
            Value::Object(map) => map.values().all(|v| match v {
                Value::Null => true,
                Value::Array(items) => items.is_empty(),
                _ => false,
            }),
            _ => false,
        }
    }

    /// Two-space indented JSON of the `data` value.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.data)
            .map_err(|e| QueryError::io(format!("Failed to serialize result: {e}")))
    }
}
