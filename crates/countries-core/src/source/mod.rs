// crates/countries-core/src/source/mod.rs

//! # Country Sources
//!
//! Configuration shared by remote [`CountrySource`](crate::traits::CountrySource)
//! implementations, and the HTTP implementation itself.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpCountrySource;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from the list endpoint; everything else is dropped server side.
pub const LIST_FIELDS: &str = "name,cca2,capital,population,area,flags";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how to reach the countries API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// API root without trailing slash, e.g. `https://restcountries.com/v3.1`.
    pub base_url: String,
    /// Whole-request timeout enforced by the client.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl SourceConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `GET` target for the full list.
    pub fn all_url(&self) -> String {
        format!("{}/all?fields={LIST_FIELDS}", self.base_url.trim_end_matches('/'))
    }

    /// `GET` target for a single code.
    pub fn code_url(&self, code: &str) -> String {
        format!("{}/alpha/{code}", self.base_url.trim_end_matches('/'))
    }
}
