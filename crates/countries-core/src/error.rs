// crates/countries-core/src/error.rs
use thiserror::Error;

/// Message shown when the connectivity pre-check fails.
pub const NO_CONNECTION_MESSAGE: &str = "You don't have internet connection";

/// Fallback message for source failures that carry no usable text.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong while loading countries";

/// Failures reported by a [`CountrySource`](crate::traits::CountrySource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// The requested code resolved to nothing.
    #[error("Country not found: {0}")]
    NotFound(String),

    /// Transport-level failure described by the collaborator.
    #[error("Network error: {0}")]
    Network(String),

    #[error(transparent)]
    #[cfg(feature = "http")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The payload decoded but does not describe a country.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Errors surfaced at the screen boundary.
///
/// These never escape a screen: they are converted into a
/// `LoadingFailed` state via [`CountriesError::user_message`].
#[derive(Debug, Error)]
pub enum CountriesError {
    /// Detected before any source call.
    #[error("{}", NO_CONNECTION_MESSAGE)]
    NoConnectivity,

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl CountriesError {
    /// Human readable text placed in a `LoadingFailed` state.
    pub fn user_message(&self) -> String {
        match self {
            CountriesError::NoConnectivity => NO_CONNECTION_MESSAGE.to_string(),
            CountriesError::Source(SourceError::Network(msg)) if msg.trim().is_empty() => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            CountriesError::Source(e) => e.to_string(),
        }
    }

    /// True when the failure is a not-found lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CountriesError::Source(SourceError::NotFound(_)))
    }
}

pub type Result<T> = std::result::Result<T, CountriesError>;
