use serde::Deserialize;

/// Raw country structure as it comes from the REST countries JSON:
/// {
///   "name": { "common": "France", "official": "French Republic" },
///   "cca2": "FR",
///   "capital": ["Paris"],
///   "population": 67391582,
///   "area": 551695.0,
///   "flags": { "png": "https://flagcdn.com/w320/fr.png", "svg": "..." }
/// }
/// NOTE: This type mirrors the external API. We do *not* expose it from the
/// public model; see [`crate::convert`].
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    #[serde(default)]
    pub name: Option<NameRaw>,
    #[serde(default)]
    pub cca2: Option<String>,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub population: Option<i64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub flags: Option<FlagsRaw>,
}

#[derive(Debug, Deserialize)]
pub struct NameRaw {
    #[serde(default)]
    pub common: Option<String>,
    #[serde(default)]
    pub official: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
}

pub type CountriesRaw = Vec<CountryRaw>;

/// The by-code endpoint answers with either an array or a single object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    Many(CountriesRaw),
    One(Box<CountryRaw>),
}

impl OneOrMany {
    pub fn into_first(self) -> Option<CountryRaw> {
        match self {
            OneOrMany::Many(v) => v.into_iter().next(),
            OneOrMany::One(c) => Some(*c),
        }
    }
}
