// crates/countries-core/src/traits.rs
use crate::error::SourceError;
use crate::model::Country;
use crate::text::fold_key;
use async_trait::async_trait;
use std::sync::Arc;

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get [`NameMatch::name_contains`], a substring
/// match on the [`fold_key`] form (accent- and case-insensitive).
///
/// # Examples
/// ```rust
/// use countries_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Réunion").name_contains("reun"));
/// assert!(Place("France").name_contains("FRA"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Returns `true` if the folded name contains the folded `q`.
    /// An empty `q` matches everything.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        self.name()
    }
}

/// The remote data provider behind both screens.
///
/// Implementations own transport concerns (timeouts, decoding). Screens
/// only see records or a [`SourceError`].
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetches every country, in the provider's order.
    async fn fetch_all(&self) -> Result<Vec<Arc<Country>>, SourceError>;

    /// Fetches one country by its code.
    ///
    /// An unknown code is `Err(SourceError::NotFound)`.
    async fn fetch_by_code(&self, code: &str) -> Result<Country, SourceError>;
}

/// Reports whether the device currently has network access.
///
/// Must be cheap, synchronous and infallible: any underlying failure is
/// reported as `false`.
pub trait ConnectivityProbe: Send + Sync {
    fn check_connection(&self) -> bool;
}
