//! GraphQL query construction.
//!
//! Renders a query document from a product, a field selection, a date range
//! and an optional equality filter. Purely textual: no network access and no
//! schema checks.

use std::fmt::Write as _;

use chrono::{Days, NaiveDate};

use crate::error::{QueryError, Result};
use crate::product::ProductType;

/// Maximum number of rows requested from the API.
pub const FETCH_LIMIT: u32 = 10_000;

/// Ordered, de-duplicated, non-empty list of fields to group by and select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<String>,
}

impl FieldSelection {
    /// Creates a selection, dropping repeated fields (the first occurrence
    /// keeps its position) and blank entries.
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for field in fields {
            let field = field.as_ref().trim();
            if field.is_empty() || unique.iter().any(|f| f == field) {
                continue;
            }
            unique.push(field.to_string());
        }

        if unique.is_empty() {
            return Err(QueryError::EmptyFieldSelection);
        }

        Ok(Self { fields: unique })
    }

    /// Returns the fields in selection order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false; a selection holds at least one field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range. Fails if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(QueryError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range starting `days` days before `end` and ending on `end`.
    ///
    /// Fails if the start would fall outside the supported calendar.
    pub fn last_days(end: NaiveDate, days: u32) -> Result<Self> {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(|| {
                QueryError::config(format!("A {days}-day window before {end} is out of range"))
            })?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Timestamp of the first second of the start day.
    pub fn begin_timestamp(&self) -> String {
        format!("{}T00:00:00", self.start.format("%Y-%m-%d"))
    }

    /// Timestamp of the last second of the end day.
    pub fn end_timestamp(&self) -> String {
        format!("{}T23:59:59", self.end.format("%Y-%m-%d"))
    }
}

/// Right-hand side of an equality filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Digits only; rendered as a bare integer literal.
    Numeric(String),
    /// Anything else; rendered as a quoted string literal.
    Text(String),
}

impl FilterValue {
    /// Classifies a raw value.
    ///
    /// A value made only of ASCII digits is numeric. This means a field that
    /// expects a digits-only *string* cannot be filtered on.
    pub fn classify(raw: &str) -> Self {
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
            Self::Numeric(raw.to_string())
        } else {
            Self::Text(raw.to_string())
        }
    }

    /// Renders the value as a GraphQL literal.
    pub fn render(&self) -> String {
        match self {
            Self::Numeric(digits) => digits.clone(),
            Self::Text(text) => {
                let mut out = String::with_capacity(text.len() + 2);
                out.push('"');
                for c in text.chars() {
                    match c {
                        '"' => out.push_str("\\\""),
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        '\r' => out.push_str("\\r"),
                        '\t' => out.push_str("\\t"),
                        c if c.is_control() => {
                            let _ = write!(out, "\\u{:04X}", u32::from(c));
                        }
                        c => out.push(c),
                    }
                }
                out.push('"');
                out
            }
        }
    }
}

/// Optional `field: value` equality constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    field: String,
    value: FilterValue,
}

impl Filter {
    /// Builds a filter from raw form input.
    ///
    /// Returns `None` when either the field or the value is blank.
    pub fn from_parts(field: &str, value: &str) -> Option<Self> {
        let field = field.trim();
        let value = value.trim();
        if field.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self {
            field: field.to_string(),
            value: FilterValue::classify(value),
        })
    }

    /// Renders the clause as it appears inside the `filter` block.
    pub fn render(&self) -> String {
        format!("{}: {}", self.field, self.value.render())
    }
}

/// A rendered GraphQL document together with the product it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    product: ProductType,
    text: String,
}

impl Query {
    pub fn product(&self) -> ProductType {
        self.product
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Builds the aggregated query for `product`.
///
/// Output is deterministic: the same inputs always produce the same text.
pub fn build_query(
    product: ProductType,
    fields: &FieldSelection,
    range: &DateRange,
    filter: Option<&Filter>,
) -> Query {
    let group_by = fields.fields().join(",");

    let mut text = String::new();
    let _ = writeln!(text, "query {} {{", product.query_name());
    let _ = writeln!(text, "    {}(", product.root_field());
    let _ = writeln!(text, "        limit: {FETCH_LIMIT},");
    let _ = writeln!(text, "        filter: {{");
    let _ = write!(
        text,
        "            tsRange: {{begin: \"{}\", end: \"{}\"}}",
        range.begin_timestamp(),
        range.end_timestamp()
    );
    match filter {
        Some(filter) => {
            let _ = writeln!(text, ",");
            let _ = writeln!(text, "            {}", filter.render());
        }
        None => text.push('\n'),
    }
    let _ = writeln!(text, "        }},");
    let _ = writeln!(text, "        aggregate: {{count: ts}},");
    let _ = writeln!(text, "        groupBy: [{group_by}],");
    let _ = writeln!(text, "        orderBy: [count_DESC]");
    let _ = writeln!(text, "    ) {{");
    for field in fields.fields() {
        let _ = writeln!(text, "        {field}");
    }
    let _ = writeln!(text, "    }}");
    text.push_str("}\n");

    Query { product, text }
}
