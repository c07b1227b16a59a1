use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use sitesearch::interactive::{InteractiveSearch, SearchOptions};
use sitesearch::{SearchClient, interactive::constants::SEARCH_DEBOUNCE_MS};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sitesearch",
    version,
    about = "Interactive terminal client for incremental blog search",
    long_about = None
)]
struct Cli {
    /// Base URL of the site, e.g. https://blog.example.com
    #[arg(env = "SITESEARCH_URL")]
    base_url: String,

    /// Force the mobile full-screen overlay layout
    #[arg(long)]
    mobile: bool,

    /// Debounce quiet interval in milliseconds
    #[arg(long, default_value_t = SEARCH_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// HTTP timeout for each search request, in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "sitesearch=debug"
    } else {
        "sitesearch=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = SearchClient::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))
        .with_context(|| format!("cannot use {} as a search endpoint", cli.base_url))?;

    let options = SearchOptions {
        debounce_ms: cli.debounce_ms,
        force_mobile: cli.mobile,
    };
    let mut session = InteractiveSearch::new(client, options);
    session.run()
}
