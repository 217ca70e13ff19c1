// crates/countries-core/src/screen/state.rs
use crate::model::Country;
use std::sync::Arc;

/// What the list screen currently shows.
///
/// Exactly one variant is active; consumers are expected to `match`
/// exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum CountriesState {
    /// Fetch in progress. Carries no search text.
    Loading,
    /// The visible list (master list after filter and sort) and the query
    /// that produced it.
    LoadedData {
        countries: Vec<Arc<Country>>,
        query: String,
    },
    /// User-facing failure text. Carries no search text.
    LoadingFailed { message: String },
}

impl CountriesState {
    /// Search text to prefill the input with.
    pub fn search_request(&self) -> &str {
        match self {
            CountriesState::LoadedData { query, .. } => query,
            CountriesState::Loading | CountriesState::LoadingFailed { .. } => "",
        }
    }

    pub fn countries(&self) -> Option<&[Arc<Country>]> {
        match self {
            CountriesState::LoadedData { countries, .. } => Some(countries),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            CountriesState::LoadingFailed { message } => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CountriesState::Loading)
    }
}

/// What the detail screen currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CountryState {
    Loading,
    Loaded(Arc<Country>),
    LoadingFailed { message: String },
}

impl CountryState {
    pub fn country(&self) -> Option<&Country> {
        match self {
            CountryState::Loaded(c) => Some(c),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            CountryState::LoadingFailed { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loaded_data_carries_search_text() {
        let loaded = CountriesState::LoadedData {
            countries: Vec::new(),
            query: "ger".into(),
        };
        assert_eq!(loaded.search_request(), "ger");
        assert_eq!(CountriesState::Loading.search_request(), "");
        let failed = CountriesState::LoadingFailed {
            message: "boom".into(),
        };
        assert_eq!(failed.search_request(), "");
        assert_eq!(failed.failure(), Some("boom"));
    }
}
