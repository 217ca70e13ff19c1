//! Plain-text rendering of screen states.

use countries_core::{CountriesState, Country, CountryState, SortKey};

/// One line per country for the list view.
pub fn country_row(c: &Country) -> String {
    let code = c.code().unwrap_or("--");
    format!(
        "{} ({}) | {} | population: {} | surface: {} km²",
        c.name(),
        code,
        c.capital_or_placeholder().trim(),
        c.population(),
        c.surface()
    )
}

/// Multi-line detail block.
pub fn country_detail(c: &Country) -> String {
    let mut out = String::new();
    out.push_str(&format!("Country: {}\n", c.name()));
    out.push_str(&format!("Code: {}\n", c.code().unwrap_or("-")));
    out.push_str(&format!("Capital: {}\n", c.capital_or_placeholder().trim()));
    out.push_str(&format!("Population: {}\n", c.population()));
    out.push_str(&format!("Surface: {} km²\n", c.surface()));
    out.push_str(&format!("Flag: {}", c.image().unwrap_or("-")));
    out
}

pub fn list_state(state: &CountriesState) -> String {
    match state {
        CountriesState::Loading => "Loading countries...".to_string(),
        CountriesState::LoadedData { countries, query } if countries.is_empty() => {
            if query.is_empty() {
                "No countries available.".to_string()
            } else {
                format!("No countries match \"{query}\".")
            }
        }
        CountriesState::LoadedData { countries, .. } => countries
            .iter()
            .map(|c| country_row(c))
            .collect::<Vec<_>>()
            .join("\n"),
        CountriesState::LoadingFailed { message } => message.clone(),
    }
}

pub fn detail_state(state: &CountryState) -> String {
    match state {
        CountryState::Loading => "Loading country...".to_string(),
        CountryState::Loaded(c) => country_detail(c),
        CountryState::LoadingFailed { message } => message.clone(),
    }
}

pub fn sort_options() -> String {
    SortKey::options()
        .map(|(label, key)| format!("{label} -> {key}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn france() -> Country {
        Country {
            code: Some("FR".into()),
            name: Some("France".into()),
            capital: Some("Paris".into()),
            population: 67_000_000,
            surface: 551_695.0,
            image: None,
        }
    }

    #[test]
    fn row_shows_all_columns() {
        assert_eq!(
            country_row(&france()),
            "France (FR) | Paris | population: 67000000 | surface: 551695 km²"
        );
    }

    #[test]
    fn missing_capital_uses_placeholder() {
        let c = Country {
            capital: None,
            ..france()
        };
        assert!(country_row(&c).contains("| - |"));
    }

    #[test]
    fn empty_search_result_names_the_query() {
        let state = CountriesState::LoadedData {
            countries: Vec::new(),
            query: "zz".into(),
        };
        assert_eq!(list_state(&state), "No countries match \"zz\".");
    }

    #[test]
    fn loaded_list_is_one_row_per_country() {
        let state = CountriesState::LoadedData {
            countries: vec![Arc::new(france()), Arc::new(france())],
            query: String::new(),
        };
        assert_eq!(list_state(&state).lines().count(), 2);
    }

    #[test]
    fn sort_menu_in_order() {
        assert_eq!(
            sort_options(),
            "By name -> name\nBy population -> population\nBy surface -> surface"
        );
    }
}
