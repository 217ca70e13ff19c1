// crates/countries-core/src/search.rs
//! # Sort/Filter Engine
//!
//! Pure derivation of a *visible list* from a *master list*: keep the
//! countries whose name contains the query, then order them by an optional
//! [`SortKey`]. Nothing here mutates its input or performs I/O, so the same
//! inputs always give the same output.

use crate::model::Country;
use crate::text::fold_key;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field selector for ordering the visible list.
///
/// `None` at call sites (`Option<SortKey>`) means "keep source order".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending, case- and accent-insensitive; absent names last.
    Name,
    /// Descending.
    Population,
    /// Descending.
    Surface,
}

impl SortKey {
    /// Every key, in menu order.
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Population, SortKey::Surface];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "By name",
            SortKey::Population => "By population",
            SortKey::Surface => "By surface",
        }
    }

    /// Stable machine name, also accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Population => "population",
            SortKey::Surface => "surface",
        }
    }

    /// `(label, key)` pairs for a sort menu, in [`SortKey::ALL`] order.
    pub fn options() -> impl Iterator<Item = (&'static str, SortKey)> {
        Self::ALL.into_iter().map(|k| (k.label(), k))
    }

    fn compare(self, a: &Country, b: &Country) -> Ordering {
        match self {
            SortKey::Name => name_sort_key(a).cmp(&name_sort_key(b)),
            SortKey::Population => b.population.cmp(&a.population),
            SortKey::Surface => b.surface.total_cmp(&a.surface),
        }
    }
}

fn name_sort_key(c: &Country) -> (bool, String) {
    match c.name.as_deref() {
        Some(n) => (false, fold_key(n)),
        None => (true, String::new()),
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}' (expected name, population or surface)")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| {
                k.as_str().eq_ignore_ascii_case(s) || k.label().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}

/// Keeps the countries whose name contains `query` (folded), in input order.
///
/// An empty query keeps everything.
pub fn filter_by_name<C>(countries: &[C], query: &str) -> Vec<C>
where
    C: AsRef<Country> + Clone,
{
    if query.is_empty() {
        return countries.to_vec();
    }
    countries
        .iter()
        .filter(|c| c.as_ref().name_contains(query))
        .cloned()
        .collect()
}

/// Stable in-place ordering by `key`.
pub fn sort_in_place<C>(countries: &mut Vec<C>, key: SortKey)
where
    C: AsRef<Country>,
{
    match key {
        SortKey::Name => {
            // Decorate once so folding is O(n), then a stable sort.
            let mut keyed: Vec<((bool, String), C)> = countries
                .drain(..)
                .map(|c| (name_sort_key(c.as_ref()), c))
                .collect();
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            countries.extend(keyed.into_iter().map(|(_, c)| c));
        }
        numeric => countries.sort_by(|a, b| numeric.compare(a.as_ref(), b.as_ref())),
    }
}

/// The engine: filter by `query`, then order by `sort`.
///
/// Always call this on the unfiltered master list; feeding it a previous
/// result would compound filters.
///
/// # Examples
///
/// ```rust
/// use countries_core::search::{apply, SortKey};
/// use countries_core::Country;
///
/// let c = |name: &str, population| Country {
///     code: None,
///     name: Some(name.into()),
///     capital: None,
///     population,
///     surface: 0.0,
///     image: None,
/// };
/// let all = vec![c("France", 10), c("Germany", 20), c("French Guiana", 30)];
///
/// let visible = apply(&all, "fr", Some(SortKey::Population));
/// let names: Vec<_> = visible.iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["French Guiana", "France"]);
/// ```
pub fn apply<C>(countries: &[C], query: &str, sort: Option<SortKey>) -> Vec<C>
where
    C: AsRef<Country> + Clone,
{
    let mut out = filter_by_name(countries, query);
    if let Some(key) = sort {
        sort_in_place(&mut out, key);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn country(name: Option<&str>, population: i64, surface: f64) -> Country {
        Country {
            code: name.map(|n| n.chars().take(2).collect::<String>().to_uppercase()),
            name: name.map(str::to_string),
            capital: None,
            population,
            surface,
            image: None,
        }
    }

    fn names(list: &[Country]) -> Vec<&str> {
        list.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn population_sorts_descending() {
        let all = vec![
            country(Some("A"), 10, 0.0),
            country(Some("B"), 5, 0.0),
            country(Some("C"), 20, 0.0),
        ];
        let pops: Vec<i64> = apply(&all, "", Some(SortKey::Population))
            .iter()
            .map(|c| c.population)
            .collect();
        assert_eq!(pops, [20, 10, 5]);
    }

    #[test]
    fn surface_sorts_descending() {
        let all = vec![
            country(Some("A"), 0, 1.5),
            country(Some("B"), 0, 3.0),
            country(Some("C"), 0, 2.0),
        ];
        let surfaces: Vec<f64> = apply(&all, "", Some(SortKey::Surface))
            .iter()
            .map(|c| c.surface)
            .collect();
        assert_eq!(surfaces, [3.0, 2.0, 1.5]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let all = vec![
            country(Some("Bravo"), 0, 0.0),
            country(Some("alpha"), 0, 0.0),
            country(Some("Charlie"), 0, 0.0),
        ];
        assert_eq!(
            names(&apply(&all, "", Some(SortKey::Name))),
            ["alpha", "Bravo", "Charlie"]
        );
    }

    #[test]
    fn absent_names_sort_last() {
        let all = vec![
            country(None, 1, 0.0),
            country(Some("Zimbabwe"), 2, 0.0),
            country(Some("Albania"), 3, 0.0),
        ];
        let pops: Vec<i64> = apply(&all, "", Some(SortKey::Name))
            .iter()
            .map(|c| c.population)
            .collect();
        assert_eq!(pops, [3, 2, 1]);
    }

    #[test]
    fn name_compare_matches_decorated_sort() {
        let a = country(Some("alpha"), 0, 0.0);
        let b = country(Some("Bravo"), 0, 0.0);
        let none = country(None, 0, 0.0);
        assert_eq!(SortKey::Name.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::Name.compare(&none, &a), Ordering::Greater);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let all = vec![
            country(Some("France"), 0, 0.0),
            country(Some("Germany"), 0, 0.0),
        ];
        assert_eq!(names(&apply(&all, "fra", None)), ["France"]);
        assert_eq!(names(&apply(&all, "", None)), ["France", "Germany"]);
        assert!(apply(&all, "xyz", None).is_empty());
    }

    #[test]
    fn no_sort_keeps_source_order() {
        let all = vec![
            country(Some("Chile"), 1, 0.0),
            country(Some("Austria"), 3, 0.0),
            country(Some("Brazil"), 2, 0.0),
        ];
        assert_eq!(names(&apply(&all, "", None)), ["Chile", "Austria", "Brazil"]);
    }

    #[test]
    fn works_over_shared_records() {
        let all: Vec<Arc<Country>> = vec![
            Arc::new(country(Some("Peru"), 1, 0.0)),
            Arc::new(country(Some("Portugal"), 2, 0.0)),
        ];
        let visible = apply(&all, "p", Some(SortKey::Population));
        assert!(Arc::ptr_eq(&visible[0], &all[1]));
        assert!(Arc::ptr_eq(&visible[1], &all[0]));
    }

    #[test]
    fn sort_key_parsing_and_menu_order() {
        assert_eq!("Population".parse::<SortKey>(), Ok(SortKey::Population));
        assert_eq!("by name".parse::<SortKey>(), Ok(SortKey::Name));
        assert!("area".parse::<SortKey>().is_err());
        let labels: Vec<&str> = SortKey::options().map(|(label, _)| label).collect();
        assert_eq!(labels, ["By name", "By population", "By surface"]);
    }

    fn arb_country() -> impl Strategy<Value = Country> {
        (
            proptest::option::of("[A-Za-z ]{0,8}"),
            0i64..50,
            0u8..20,
        )
            .prop_map(|(name, population, surface)| Country {
                code: None,
                name,
                capital: None,
                population,
                surface: f64::from(surface) / 2.0,
                image: None,
            })
    }

    fn arb_sort() -> impl Strategy<Value = Option<SortKey>> {
        proptest::option::of(proptest::sample::select(SortKey::ALL.to_vec()))
    }

    proptest! {
        #[test]
        fn apply_is_pure(
            list in proptest::collection::vec(arb_country(), 0..30),
            q in "[a-z]{0,2}",
            sort in arb_sort(),
        ) {
            let before = list.clone();
            let first = apply(&list, &q, sort);
            let second = apply(&list, &q, sort);
            prop_assert_eq!(&list, &before);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn numeric_ties_keep_source_order(
            list in proptest::collection::vec(arb_country(), 0..30),
        ) {
            let indexed: Vec<(usize, Country)> = list.into_iter().enumerate().collect();
            let master: Vec<IndexedCountry> = indexed
                .into_iter()
                .map(|(i, c)| IndexedCountry(i, c))
                .collect();
            let sorted = apply(&master, "", Some(SortKey::Population));
            for pair in sorted.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.1.population >= b.1.population);
                if a.1.population == b.1.population {
                    prop_assert!(a.0 < b.0);
                }
            }
        }

        #[test]
        fn filter_never_grows_the_list(
            list in proptest::collection::vec(arb_country(), 0..30),
            q in "[a-z]{0,3}",
        ) {
            let visible = apply(&list, &q, None);
            prop_assert!(visible.len() <= list.len());
            prop_assert!(visible.iter().all(|c| c.name_contains(&q)));
        }
    }

    #[derive(Clone, Debug)]
    struct IndexedCountry(usize, Country);

    impl AsRef<Country> for IndexedCountry {
        fn as_ref(&self) -> &Country {
            &self.1
        }
    }
}
