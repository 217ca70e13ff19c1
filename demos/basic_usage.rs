//! Basic usage example for countries-rs
//!
//! This example demonstrates how to:
//! - Fetch the country list through the list screen
//! - Search and sort without refetching
//! - Open a single country through the detail screen
//!
//! It talks to the live REST Countries API; without a connection every step
//! prints the "no internet connection" message instead.

use countries_rs::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== countries-rs Basic Usage Example ===\n");

    let source: Arc<dyn CountrySource> = Arc::new(HttpCountrySource::shared()?);
    let probe: Arc<dyn ConnectivityProbe> = match TcpProbe::for_url(DEFAULT_BASE_URL) {
        Some(p) => Arc::new(p),
        None => Arc::new(FixedConnectivity::online()),
    };

    // Example 1: Load everything
    println!("--- Example 1: Fetch all countries ---");
    let list = ListScreen::new(source.clone(), probe.clone());
    list.fetch_all().await;
    match list.state() {
        CountriesState::LoadedData { countries, .. } => {
            println!("Total countries: {}", countries.len());
            for (i, c) in countries.iter().take(5).enumerate() {
                println!("{}. {} ({})", i + 1, c.name(), c.code().unwrap_or("-"));
            }
        }
        CountriesState::LoadingFailed { message } => {
            println!("Loading failed: {message}");
            return Ok(());
        }
        CountriesState::Loading => println!("Still loading"),
    }
    println!();

    // Example 2: Search by name
    println!("--- Example 2: Search \"land\" ---");
    list.search("land");
    if let Some(found) = list.state().countries() {
        println!("{} matches", found.len());
        for c in found.iter().take(5) {
            println!("  {} | capital:{}", c.name(), c.capital_or_placeholder());
        }
    }
    println!();

    // Example 3: Sort the same result
    println!("--- Example 3: Sort the matches by population ---");
    list.sort(Some(SortKey::Population));
    if let Some(found) = list.state().countries() {
        for c in found.iter().take(5) {
            println!("  {:>12}  {}", c.population(), c.name());
        }
    }
    println!();

    // Example 4: Detail screen
    println!("--- Example 4: Country by code ---");
    let detail = DetailScreen::new(source, probe, "JP");
    detail.load().await;
    match detail.state() {
        CountryState::Loaded(c) => {
            println!("Found: {}", c.name());
            println!("Capital: {}", c.capital_or_placeholder());
            println!("Population: {}", c.population());
            println!("Surface: {} km²", c.surface());
        }
        other => println!("{other:?}"),
    }

    Ok(())
}
