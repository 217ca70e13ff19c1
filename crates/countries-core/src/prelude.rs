//! countries-rs prelude: bring common types and traits into scope.

pub use crate::connectivity::{FixedConnectivity, TcpProbe};
pub use crate::error::{CountriesError, Result, SourceError};
pub use crate::model::Country;
pub use crate::screen::{CountriesState, CountryState, DetailScreen, ListScreen};
pub use crate::search::{apply, SortKey};
#[cfg(feature = "http")]
pub use crate::source::HttpCountrySource;
pub use crate::source::{SourceConfig, DEFAULT_BASE_URL};
pub use crate::text::fold_key;
pub use crate::traits::{ConnectivityProbe, CountrySource, NameMatch};
