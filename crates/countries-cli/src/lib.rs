//! countries-cli
//! =============
//!
//! Command-line front end for [`countries-core`]: fetch, search and sort the
//! country list, and open a single country by code.
//!
//! Quick start
//! -----------
//!
//! ```text
//! countries --help
//! countries list --search fr --sort population
//! countries country jp
//! countries sorts
//! countries browse
//! ```
//!
//! `--base-url` (or `COUNTRIES_BASE_URL`) points the CLI at another API root,
//! `--offline` simulates a missing connection and `--log-level` (overridden by
//! `RUST_LOG`) controls the diagnostics written to stderr.
//!
//! The library target holds the pieces of the binary that are worth testing
//! on their own: state rendering and the `browse` line commands.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod browse;
pub mod render;
