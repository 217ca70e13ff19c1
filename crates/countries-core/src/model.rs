// crates/countries-core/src/model.rs
use serde::{Deserialize, Serialize};

/// Shown in place of a missing capital.
pub const CAPITAL_PLACEHOLDER: &str = " - ";

/// A country record as delivered by a [`CountrySource`](crate::traits::CountrySource).
///
/// Records are immutable once built. Screens share them behind `Arc`, so
/// filtering and sorting only reorder handles and never copy or touch the
/// record itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Short identifier (ISO 3166-1 alpha-2 for the default source).
    /// Used as the navigation key for the detail screen.
    pub code: Option<String>,
    pub name: Option<String>,
    pub capital: Option<String>,
    pub population: i64,
    /// Surface area in km².
    pub surface: f64,
    /// Flag image URL. Fetching and caching it is up to the UI layer.
    pub image: Option<String>,
}

impl Country {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Navigation key; an absent code becomes `""`.
    pub fn code_or_empty(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }

    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    /// Capital for display, with [`CAPITAL_PLACEHOLDER`] when absent or empty.
    pub fn capital_or_placeholder(&self) -> &str {
        match self.capital.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => CAPITAL_PLACEHOLDER,
        }
    }

    pub fn population(&self) -> i64 {
        self.population
    }

    pub fn surface(&self) -> f64 {
        self.surface
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl AsRef<Country> for Country {
    fn as_ref(&self) -> &Country {
        self
    }
}
