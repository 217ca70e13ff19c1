// crates/countries-core/src/convert.rs
use crate::model::Country;
use crate::raw::{CountriesRaw, CountryRaw};
use std::sync::Arc;

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// **Standard Converter:** Raw -> Country.
pub fn from_raw(c_raw: CountryRaw) -> Country {
    let (common, official) = match c_raw.name {
        Some(n) => (n.common, n.official),
        None => (None, None),
    };

    let image = c_raw.flags.and_then(|f| non_blank(f.png).or(non_blank(f.svg)));

    Country {
        code: non_blank(c_raw.cca2),
        name: non_blank(common).or(non_blank(official)),
        capital: c_raw.capital.into_iter().next(),
        population: c_raw.population.unwrap_or(0),
        surface: c_raw.area.unwrap_or(0.0),
        image,
    }
}

/// Converts a whole payload, keeping the order the API returned.
pub fn from_raw_list(raw_countries: CountriesRaw) -> Vec<Arc<Country>> {
    raw_countries
        .into_iter()
        .map(|c| Arc::new(from_raw(c)))
        .collect()
}
