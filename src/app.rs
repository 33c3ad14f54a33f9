//! Request resolution and the query flow.
//!
//! Merges command-line input with the config file, validates it the way the
//! query form did (catalog fields, field limit, date window), then builds and
//! runs the query.

use std::path::PathBuf;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::{validate_base_url, Config};
use crate::error::{QueryError, Result};
use crate::product::ProductType;
use crate::query::{
    build_query, AnalyticsClient, DateRange, FieldSelection, Filter, Query, QueryResult,
};

/// Maximum number of fields a single query may select.
pub const MAX_SELECTED_FIELDS: usize = 20;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[_A-Za-z][_0-9A-Za-z]*$").expect("identifier pattern is valid")
});

/// A fully validated query request.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub product: ProductType,
    pub fields: FieldSelection,
    pub range: DateRange,
    pub filter: Option<Filter>,
    pub base_url: String,
    pub output: PathBuf,
}

impl QueryRequest {
    /// Resolves a request from CLI arguments and config.
    ///
    /// Precedence: CLI (including its env fallbacks) > config file > built-in
    /// defaults. `today` bounds the date window.
    pub fn resolve(cli: &Cli, config: &Config, today: NaiveDate) -> Result<Self> {
        let product = cli.product.unwrap_or(config.defaults.product);

        let requested: Vec<String> = if !cli.fields.is_empty() {
            cli.fields.clone()
        } else if !config.defaults.fields.is_empty() {
            config.defaults.fields.clone()
        } else {
            vec![product.default_field().to_string()]
        };
        let fields = FieldSelection::new(&requested)?;
        check_fields(product, &fields)?;

        let range = resolve_range(cli, config, today)?;

        if !cli.filter_field.trim().is_empty() && !IDENTIFIER.is_match(cli.filter_field.trim()) {
            return Err(QueryError::config(format!(
                "Invalid filter field '{}': expected a GraphQL name",
                cli.filter_field
            )));
        }
        let filter = Filter::from_parts(&cli.filter_field, &cli.filter_value);

        let base_url = cli
            .base_url
            .clone()
            .unwrap_or_else(|| config.api.base_url.clone());
        validate_base_url(&base_url)?;

        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| config.defaults.output.clone());

        Ok(Self {
            product,
            fields,
            range,
            filter,
            base_url,
            output,
        })
    }

    /// Renders the GraphQL query for this request.
    pub fn build(&self) -> Query {
        build_query(self.product, &self.fields, &self.range, self.filter.as_ref())
    }
}

/// Checks every selected field against the catalog and the field limit.
fn check_fields(product: ProductType, fields: &FieldSelection) -> Result<()> {
    if let Some(unknown) = fields.fields().iter().find(|f| !product.has_field(f)) {
        return Err(QueryError::UnknownField {
            product: product.label().to_string(),
            field: unknown.clone(),
        });
    }

    if fields.len() > MAX_SELECTED_FIELDS {
        return Err(QueryError::config(format!(
            "Too many fields selected ({}); the limit is {}",
            fields.len(),
            MAX_SELECTED_FIELDS
        )));
    }

    Ok(())
}

fn resolve_range(cli: &Cli, config: &Config, today: NaiveDate) -> Result<DateRange> {
    let defaults = DateRange::last_days(today, config.defaults.days)?;
    let start = cli.from.unwrap_or(defaults.start());
    let end = cli.to.unwrap_or(today);

    let range = DateRange::new(start, end)?;

    let earliest = DateRange::last_days(today, config.defaults.max_lookback_days)?.start();
    if range.start() < earliest {
        return Err(QueryError::config(format!(
            "Start date {} is more than {} days ago",
            range.start(),
            config.defaults.max_lookback_days
        )));
    }
    if range.end() > today {
        return Err(QueryError::config(format!(
            "End date {} is in the future",
            range.end()
        )));
    }

    Ok(range)
}

/// Returns the API key, or a configuration error if none was supplied.
pub fn require_api_key(cli: &Cli) -> Result<String> {
    match cli.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(QueryError::config(
            "API key is required. Use --api-key or set RTQ_API_KEY.",
        )),
    }
}

/// Builds the query for `request` and runs it with `client`.
///
/// Returns the query alongside the result so the caller can show both.
pub async fn run_query(
    client: &dyn AnalyticsClient,
    request: &QueryRequest,
    api_key: &str,
) -> Result<(Query, QueryResult)> {
    let query = request.build();
    debug!("Built query:\n{}", query);

    let result = client.execute(&query, api_key).await?;
    info!(
        "{} returned {} rows",
        request.product.root_field(),
        result.rows().map_or(0, Vec::len)
    );

    Ok((query, result))
}
