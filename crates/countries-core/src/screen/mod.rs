// crates/countries-core/src/screen/mod.rs

//! # Screens
//!
//! One state machine per screen. Each owns a single-writer `watch` slot that
//! UI layers read via `state()` (snapshot) or `subscribe()` (change stream).
//!
//! Fetches are numbered. A result is published only if no newer fetch was
//! started on the same screen in the meantime, so a slow, stale request can
//! never overwrite the outcome of a later one.

mod detail;
mod list;
mod state;

pub use detail::DetailScreen;
pub use list::ListScreen;
pub use state::{CountriesState, CountryState};

use std::sync::{Mutex, MutexGuard, PoisonError};

// A panic while holding screen data leaves it consistent (every write is a
// plain field store), so poisoning is ignored.
pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
