//! Rendering and saving query results.
//!
//! Results are written as pretty JSON to a file, or to stdout when the
//! destination is `-`.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{QueryError, Result};
use crate::query::QueryResult;

/// Message shown when the API returned nothing.
pub const NO_DATA_MESSAGE: &str = "No data found.";

/// What happened to a result handed to [`write_result`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Nothing was written because the result was empty.
    Empty,
    /// Written to stdout.
    Stdout,
    /// Written to the given file; carries the byte count.
    File { bytes: usize },
}

/// Returns true if `dest` means standard output.
pub fn is_stdout(dest: &Path) -> bool {
    dest.as_os_str() == "-"
}

/// Writes `result` to `dest` unless it is empty.
///
/// Parent directories of a file destination are created as needed.
pub fn write_result(result: &QueryResult, dest: &Path) -> Result<WriteOutcome> {
    if result.is_empty() {
        return Ok(WriteOutcome::Empty);
    }

    let mut json = result.to_pretty_json()?;
    json.push('\n');

    if is_stdout(dest) {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(json.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| QueryError::io(format!("Failed to write to stdout: {e}")))?;
        return Ok(WriteOutcome::Stdout);
    }

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            QueryError::io(format!("Failed to create {}: {e}", parent.display()))
        })?;
    }

    fs::write(dest, &json)
        .map_err(|e| QueryError::io(format!("Failed to write {}: {e}", dest.display())))?;
    info!("Wrote {} bytes to {}", json.len(), dest.display());

    Ok(WriteOutcome::File { bytes: json.len() })
}

/// One-line summary of a result for the terminal.
pub fn summary(result: &QueryResult) -> String {
    if result.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }
    match result.rows() {
        Some(rows) => format!(
            "Results for {}: {} rows",
            result.product().root_field(),
            rows.len()
        ),
        None => format!("Results for {}:", result.product().root_field()),
    }
}
