// crates/countries-core/src/source/http.rs
use super::SourceConfig;
use crate::convert::{from_raw, from_raw_list};
use crate::error::SourceError;
use crate::model::Country;
use crate::raw::{CountriesRaw, OneOrMany};
use crate::traits::CountrySource;
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use reqwest::{Client, StatusCode};
use std::sync::Arc;

// Single in-process client for the default configuration, so connection
// pools are reused across screens.
static SHARED_CLIENT: OnceCell<Client> = OnceCell::new();

/// [`CountrySource`] backed by a REST countries API over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpCountrySource {
    client: Client,
    config: SourceConfig,
}

fn build_client(config: &SourceConfig) -> Result<Client, SourceError> {
    Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(SourceError::Http)
}

impl HttpCountrySource {
    /// Source with its own client built from `config`.
    pub fn new(config: SourceConfig) -> Result<Self, SourceError> {
        let client = build_client(&config)?;
        Ok(Self { client, config })
    }

    /// Source for [`SourceConfig::default`], reusing the process-wide client.
    pub fn shared() -> Result<Self, SourceError> {
        let config = SourceConfig::default();
        let client = SHARED_CLIENT
            .get_or_try_init(|| build_client(&config))?
            .clone();
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    async fn get_bytes(&self, url: &str) -> Result<(StatusCode, Vec<u8>), SourceError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        Ok((status, body.to_vec()))
    }
}

fn ensure_success(status: StatusCode, url: &str) -> Result<(), SourceError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(SourceError::Network(format!("{url} answered {status}")))
    }
}

#[async_trait]
impl CountrySource for HttpCountrySource {
    #[tracing::instrument(level = "debug", skip(self), fields(base = %self.config.base_url))]
    async fn fetch_all(&self) -> Result<Vec<Arc<Country>>, SourceError> {
        let url = self.config.all_url();
        let (status, body) = self.get_bytes(&url).await?;
        ensure_success(status, &url)?;

        let raw: CountriesRaw = serde_json::from_slice(&body)?;
        tracing::debug!(count = raw.len(), "decoded country list");
        Ok(from_raw_list(raw))
    }

    #[tracing::instrument(level = "debug", skip(self), fields(base = %self.config.base_url))]
    async fn fetch_by_code(&self, code: &str) -> Result<Country, SourceError> {
        let code = code.trim();
        // Codes are short alphanumerics; anything else cannot name a country
        // and must not be spliced into the path.
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SourceError::NotFound(code.to_string()));
        }

        let url = self.config.code_url(code);
        let (status, body) = self.get_bytes(&url).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(code.to_string()));
        }
        ensure_success(status, &url)?;

        let parsed: OneOrMany = serde_json::from_slice(&body)?;
        let country = parsed
            .into_first()
            .map(from_raw)
            .ok_or_else(|| SourceError::NotFound(code.to_string()))?;
        // All wire fields are optional, so any JSON object decodes.
        if country.name.is_none() && country.code.is_none() {
            return Err(SourceError::InvalidData(format!(
                "{url} answered a record without name or code"
            )));
        }
        Ok(country)
    }
}
