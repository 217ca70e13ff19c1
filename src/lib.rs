//! countries-rs
//!
//! Workspace facade over [`countries_core`], so the demos can depend on a
//! single crate.

pub use countries_core::*;
