//! YAML configuration for providers and request behaviour.
//!
//! Every field is optional. A missing file section falls back to its
//! default, and command-line flags (see [`crate::cli::Cli`]) are layered on
//! top by [`Config::apply_cli`].
//!
//! ```yaml
//! country: in
//! timeout_secs: 20
//! providers:
//!   newsapi:
//!     api_key: "..."
//!   mediastack:
//!     api_key: "..."
//!     enabled: false
//!   gnews:
//!     api_key: "..."
//!     base_url: "https://gnews.io/api/v4/top-headlines"
//! keywords:
//!   Sports: [cricket, kabaddi, hockey]
//! ```

use crate::classifier::Category;
use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::time::Duration;
use tracing::{info, instrument};

pub const DEFAULT_COUNTRY: &str = "in";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Country code sent to every provider.
    pub country: String,
    /// Per-request timeout. Unset leaves the HTTP client default in place.
    pub timeout_secs: Option<u64>,
    pub providers: Providers,
    /// Replacement keyword lists for individual categories.
    pub keywords: BTreeMap<Category, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            timeout_secs: None,
            providers: Providers::default(),
            keywords: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Providers {
    pub newsapi: ProviderConfig,
    pub mediastack: ProviderConfig,
    pub gnews: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub enabled: bool,
    pub api_key: Option<String>,
    /// Endpoint override; the provider's public URL is used when unset.
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            base_url: None,
        }
    }
}

impl ProviderConfig {
    pub fn base_url_or(&self, default: &str) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| default.to_string())
    }
}

impl Config {
    /// Load configuration from `path`, or defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML for
    /// this schema.
    #[instrument(level = "info")]
    pub async fn load(path: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let Some(path) = path else {
            info!("No config file given; using defaults");
            return Ok(Self::default());
        };

        let raw = tokio::fs::read_to_string(path).await?;
        let config = Self::from_yaml(&raw)?;
        info!(path, "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    /// Layer command-line and environment values over the file values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(country) = &cli.country {
            self.country = country.clone();
        }
        if let Some(key) = &cli.newsapi_key {
            self.providers.newsapi.api_key = Some(key.clone());
        }
        if let Some(key) = &cli.mediastack_key {
            self.providers.mediastack.api_key = Some(key.clone());
        }
        if let Some(key) = &cli.gnews_key {
            self.providers.gnews.api_key = Some(key.clone());
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
