//! `storefront`: browse a catalog, fill a cart and check out from the terminal.
//!
//! Reads one command per line from stdin; `help` lists them. Logs go to stderr and are
//! controlled with `RUST_LOG`.

use actor_framework::tracing::setup_tracing;
use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use storefront_sim::catalog::source_from_location;
use storefront_sim::config::StorefrontConfig;
use storefront_sim::lifecycle::{Action, Storefront};
use storefront_sim::shell::{self, Input, Output};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Storefront simulation shell
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog URL or JSON file (overrides STOREFRONT_CATALOG_SOURCE)
    #[arg(long)]
    catalog: Option<String>,

    /// Catalog fetch timeout in milliseconds (overrides STOREFRONT_FETCH_TIMEOUT_MS)
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let mut config = StorefrontConfig::from_env().context("loading configuration")?;
    if let Some(catalog) = cli.catalog {
        config.catalog_source = catalog;
    }
    if let Some(ms) = cli.timeout_ms {
        config.fetch_timeout = Duration::from_millis(ms);
    }
    info!(?config, "Starting storefront");

    let source = source_from_location(&config.catalog_source, config.fetch_timeout)
        .context("configuring the catalog source")?;
    let output = Output::new();
    output.info(&format!("Loading catalog from {}", source.describe()));

    let storefront = Storefront::start(source, config.channel_capacity);

    // A failed fetch leaves the catalog empty; `load` retries
    match storefront.dispatch(Action::LoadCatalog).await {
        Ok(outcome) => output.outcome(&outcome),
        Err(e) => {
            output.failure(&e);
            output.info("Type `load` to try again");
        }
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    output.prompt();
    while let Some(line) = lines.next_line().await? {
        match shell::parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Input::Quit)) => break,
            Ok(Some(Input::Help(text))) => output.plain(&text),
            Ok(Some(Input::Action(action))) => match storefront.dispatch(action).await {
                Ok(outcome) => output.outcome(&outcome),
                Err(e) => output.failure(&e),
            },
            Err(e) => output.usage(&e.to_string()),
        }
        output.prompt();
    }

    storefront.shutdown().await.map_err(anyhow::Error::msg)?;
    Ok(())
}
