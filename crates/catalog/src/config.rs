use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{images::DEFAULT_IMAGE_BASE_URL, ConfigError};

const DEFAULT_LANGUAGE: &str = "en-US";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which catalog backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Remote,
    #[default]
    Fixture,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" | "tmdb" => Ok(Backend::Remote),
            "fixture" | "local" => Ok(Backend::Fixture),
            other => Err(ConfigError::InvalidBackend(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub backend: Backend,
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub request_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Fixture,
            api_key: None,
            api_base_url: tmdb::DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CatalogConfig {
    pub fn remote(api_key: impl Into<String>) -> Self {
        Self {
            backend: Backend::Remote,
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn fixture() -> Self {
        Self::default()
    }

    /// Read configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a key lookup.
    ///
    /// Without `MOVIEDB_BACKEND`, the remote backend is chosen whenever an
    /// API key is present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let api_key = get("TMDB_API_KEY");
        let backend = match get("MOVIEDB_BACKEND") {
            Some(value) => value.parse()?,
            None if api_key.is_some() => Backend::Remote,
            None => Backend::Fixture,
        };
        let request_timeout_secs = match get("TMDB_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(value))?,
            None => defaults.request_timeout_secs,
        };

        let config = Self {
            backend,
            api_key,
            api_base_url: get("TMDB_API_BASE_URL").unwrap_or(defaults.api_base_url),
            image_base_url: get("TMDB_IMAGE_BASE_URL").unwrap_or(defaults.image_base_url),
            language: get("TMDB_LANGUAGE").unwrap_or(defaults.language),
            request_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend == Backend::Remote && self.api_key.is_none() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("0".to_string()));
        }
        Ok(())
    }
}
