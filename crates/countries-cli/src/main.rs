//! countries: command-line front end for countries-core
//!
//! Usage examples
//! --------------
//!
//! - Print the whole list in API order
//!   $ countries list
//!
//! - Search by name and sort
//!   $ countries list --search fr --sort population
//!
//! - Show details for a country by code (case-insensitive)
//!   $ countries country jp
//!
//! - Interactive list with debounced search
//!   $ countries browse
//!
//! Data source
//! -----------
//!
//! Requests go to the REST Countries API (`--base-url` or
//! `COUNTRIES_BASE_URL` to override). Before each fetch the CLI opens a TCP
//! connection to the API host; if that fails, no request is made and the
//! "no internet connection" message is shown. `--offline` forces that path.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{anyhow, Context};
use clap::Parser;
use countries_cli::browse::{self, BrowseCommand, HELP};
use countries_cli::render;
use countries_core::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args.log_level);

    let config = SourceConfig::default()
        .with_base_url(args.base_url.clone())
        .with_timeout_secs(args.timeout_secs);
    let source: Arc<dyn CountrySource> = Arc::new(
        HttpCountrySource::new(config.clone()).context("failed to build HTTP client")?,
    );
    let probe: Arc<dyn ConnectivityProbe> = if args.offline {
        Arc::new(FixedConnectivity::offline())
    } else {
        let probe = TcpProbe::for_url(&config.base_url)
            .ok_or_else(|| anyhow!("cannot derive a host from base url {}", config.base_url))?;
        Arc::new(probe)
    };
    tracing::debug!(base_url = %config.base_url, offline = args.offline, "configured");

    match args.command {
        Commands::List { search, sort } => {
            let screen = ListScreen::new(source, probe);
            if let Some(text) = search {
                screen.search(text);
            }
            screen.sort(sort);
            screen.fetch_all().await;

            let state = screen.state();
            if let Some(message) = state.failure() {
                return Err(anyhow!(message.to_string()));
            }
            println!("{}", render::list_state(&state));
        }

        Commands::Country { code } => {
            let screen = DetailScreen::new(source, probe, code);
            screen.load().await;

            let state = screen.state();
            if let Some(message) = state.failure() {
                return Err(anyhow!(message.to_string()));
            }
            println!("{}", render::detail_state(&state));
        }

        Commands::Sorts => {
            println!("{}", render::sort_options());
        }

        Commands::Browse { debounce_ms } => {
            browse_loop(source, probe, Duration::from_millis(debounce_ms)).await?;
        }
    }

    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // Already initialised is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn browse_loop(
    source: Arc<dyn CountrySource>,
    probe: Arc<dyn ConnectivityProbe>,
    debounce: Duration,
) -> anyhow::Result<()> {
    println!("{HELP}\n");

    let screen = ListScreen::start(source.clone(), probe.clone());
    let mut rx = screen.subscribe();
    println!("{}", render::list_state(&rx.borrow_and_update()));

    let watcher = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            println!("\n{}", render::list_state(&state));
            if state.failure().is_some() {
                println!("(type :retry to try again)");
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let cmd = match browse::parse(&line) {
            None => continue,
            Some(Ok(cmd)) => cmd,
            Some(Err(e)) => {
                println!("{e}");
                continue;
            }
        };
        match cmd {
            BrowseCommand::Search(text) => {
                let screen = screen.clone();
                tokio::spawn(async move {
                    screen.search_debounced(text, debounce).await;
                });
            }
            BrowseCommand::Sort(key) => screen.sort(key),
            BrowseCommand::Retry => {
                screen.spawn_fetch_all();
            }
            BrowseCommand::Show(code) => {
                let detail = DetailScreen::new(source.clone(), probe.clone(), code);
                println!("{}", render::detail_state(&detail.state()));
                detail.load().await;
                println!("{}\n", render::detail_state(&detail.state()));
            }
            BrowseCommand::Help => println!("{HELP}"),
            BrowseCommand::Quit => break,
        }
    }

    watcher.abort();
    Ok(())
}
