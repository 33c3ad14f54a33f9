//! Command-line argument parsing for rtq.
//!
//! Uses clap to collect the query parameters the core needs.

use crate::product::ProductType;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Build, run and save GraphQL queries against real-time analytics APIs.
#[derive(Parser, Debug, Clone)]
#[command(name = "rtq")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Product to query: events or metrics
    #[arg(short = 'P', long, value_name = "PRODUCT")]
    pub product: Option<ProductType>,

    /// Comma-separated fields to group by and select (e.g., "host,status")
    #[arg(short = 'f', long, value_name = "FIELDS", value_delimiter = ',')]
    pub fields: Vec<String>,

    /// First day of the query window (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Last day of the query window, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Field for the optional equality filter
    #[arg(long, value_name = "FIELD", default_value = "")]
    pub filter_field: String,

    /// Value for the optional equality filter (digits-only values are sent unquoted)
    #[arg(long, value_name = "VALUE", default_value = "")]
    pub filter_value: String,

    /// API key sent as `Authorization: Token <key>`
    #[arg(long, value_name = "KEY", env = "RTQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long, value_name = "URL", env = "RTQ_BASE_URL")]
    pub base_url: Option<String>,

    /// Write results to this file ("-" for stdout)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the query without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// List the fields available for the product and exit
    #[arg(long)]
    pub list_fields: bool,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }

    /// Returns true if the run never needs the network.
    pub fn is_offline(&self) -> bool {
        self.dry_run || self.list_fields
    }
}
