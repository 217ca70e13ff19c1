use clap::{Parser, Subcommand};
use countries_core::source::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use countries_core::SortKey;

/// CLI arguments for countries-cli
#[derive(Debug, Parser)]
#[command(
    name = "countries",
    version,
    about = "Browse, search and sort countries from a REST countries API"
)]
pub struct CliArgs {
    /// API root (e.g. https://restcountries.com/v3.1)
    #[arg(long = "base-url", env = "COUNTRIES_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long = "timeout-secs", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Pretend the network is down (no request is made)
    #[arg(long, global = true)]
    pub offline: bool,

    /// Log filter when RUST_LOG is unset (e.g. warn, info, countries_core=debug)
    #[arg(long = "log-level", default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch all countries and print the visible list
    List {
        /// Keep only countries whose name contains this text (case-insensitive)
        #[arg(short = 's', long = "search")]
        search: Option<String>,

        /// Order by name, population or surface
        #[arg(long = "sort")]
        sort: Option<SortKey>,
    },

    /// Show one country by its code
    Country {
        /// Country code (e.g. FR, jp)
        code: String,
    },

    /// List the available sort options
    Sorts,

    /// Interactive list: type /text to search, :sort KEY, :retry, :show CODE, :quit
    Browse {
        /// Debounce delay for search input, in milliseconds
        #[arg(long = "debounce-ms", default_value_t = 300)]
        debounce_ms: u64,
    },
}
