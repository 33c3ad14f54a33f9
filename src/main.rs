//! rtq - Build, run and save GraphQL queries against real-time analytics APIs.

use realtime_query::app::{require_api_key, run_query, QueryRequest};
use realtime_query::cli::Cli;
use realtime_query::config::Config;
use realtime_query::error::Result;
use realtime_query::logging;
use realtime_query::output::{self, WriteOutcome};
use realtime_query::query::QueryExecutor;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    logging::init_stderr_logging();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    if cli.list_fields {
        let product = cli.product.unwrap_or(config.defaults.product);
        println!("Fields for {product}:");
        for field in product.fields() {
            println!("  {field}");
        }
    }

    let today = chrono::Local::now().date_naive();
    if cli.is_offline() {
        if cli.dry_run {
            print!("{}", QueryRequest::resolve(&cli, &config, today)?.build());
        }
        return Ok(());
    }

    let request = QueryRequest::resolve(&cli, &config, today)?;

    let api_key = require_api_key(&cli)?;
    let executor = QueryExecutor::new(request.base_url.clone())?;
    info!(
        "Querying {} from {} to {}",
        request.product,
        request.range.start(),
        request.range.end()
    );

    let (query, result) = run_query(&executor, &request, &api_key).await?;

    // Keep stdout for the JSON itself when writing results there
    if output::is_stdout(&request.output) {
        eprint!("{query}");
        eprintln!("{}", output::summary(&result));
    } else {
        print!("{query}");
        println!("{}", output::summary(&result));
    }
    match output::write_result(&result, &request.output)? {
        WriteOutcome::Empty | WriteOutcome::Stdout => {}
        WriteOutcome::File { bytes } => {
            println!("Saved {} ({} bytes)", request.output.display(), bytes);
        }
    }

    Ok(())
}
