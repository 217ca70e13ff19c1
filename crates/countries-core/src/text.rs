// src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```rust
/// use countries_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("FRANCE"), "france");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}
