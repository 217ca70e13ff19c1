// crates/countries-core/src/lib.rs

//! # countries-core
//!
//! Search, sort and screen state machines for a country browser backed by a
//! remote countries API.
//!
//! - [`search`]: the pure Sort/Filter Engine and [`SortKey`].
//! - [`screen`]: [`ListScreen`] and [`DetailScreen`], each publishing a
//!   tagged state through a `tokio::sync::watch` channel.
//! - [`traits`]: the collaborator seams: [`CountrySource`] and
//!   [`ConnectivityProbe`].
//! - [`source`]: the HTTP source (feature `http`) and its configuration.
//! - [`connectivity`]: ready-made probes.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod connectivity;
pub mod convert;
pub mod error;
pub mod model;
pub mod prelude;
pub mod screen;
pub mod search;
pub mod source;
pub mod text;
pub mod traits;
// Wire format of the remote API (used by the converter and the HTTP source)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{CountriesError, Result, SourceError};
pub use crate::model::Country;
pub use crate::screen::{CountriesState, CountryState, DetailScreen, ListScreen};
pub use crate::search::{apply, SortKey};
pub use crate::traits::{ConnectivityProbe, CountrySource, NameMatch};
