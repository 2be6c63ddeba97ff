//! Source adapters for the news aggregator REST APIs.
//!
//! Each adapter performs a single HTTP GET against its provider's
//! top-headlines endpoint and maps the provider-specific JSON into
//! [`Article`]s.
//!
//! # Supported Sources
//!
//! | Source | Module | Endpoint | Auth parameter |
//! |--------|--------|----------|----------------|
//! | NewsAPI | [`newsapi`] | `/v2/top-headlines` | `apiKey` |
//! | Mediastack | [`mediastack`] | `/v1/news` | `access_key` |
//! | GNews | [`gnews`] | `/api/v4/top-headlines` | `token` |
//!
//! # Common Patterns
//!
//! Adapters never return errors. Transport failures, non-success statuses
//! and payloads that do not match the expected shape are logged and turned
//! into an empty result, so one bad provider only costs coverage.
//!
//! Every module exports a pure `parse_articles(body, fetched_at)` so the
//! mapping rules can be exercised without a network.

use crate::config::{Config, ProviderConfig};
use crate::models::Article;
use crate::utils::truncate_for_log;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::error::Error;
use tracing::{debug, info, warn};
use url::Url;

pub mod gnews;
pub mod mediastack;
pub mod newsapi;

use gnews::GNews;
use mediastack::Mediastack;
use newsapi::NewsApi;

/// A provider of articles for one aggregation cycle.
pub trait NewsSource {
    /// Human-readable provider name used in logs.
    fn name(&self) -> &str;

    /// Fetch the current top headlines for a country code.
    ///
    /// Resolves to an empty vector on any failure.
    async fn fetch(&self, country: &str) -> Vec<Article>;
}

/// Every adapter the application knows how to build.
#[derive(Debug, Clone)]
pub enum Provider {
    NewsApi(NewsApi),
    Mediastack(Mediastack),
    GNews(GNews),
}

impl NewsSource for Provider {
    fn name(&self) -> &str {
        match self {
            Provider::NewsApi(s) => s.name(),
            Provider::Mediastack(s) => s.name(),
            Provider::GNews(s) => s.name(),
        }
    }

    async fn fetch(&self, country: &str) -> Vec<Article> {
        match self {
            Provider::NewsApi(s) => s.fetch(country).await,
            Provider::Mediastack(s) => s.fetch(country).await,
            Provider::GNews(s) => s.fetch(country).await,
        }
    }
}

/// Build the adapters enabled in `config`, all sharing `client`.
///
/// Providers that are disabled or have no API key are skipped with a warning.
pub fn build_providers(config: &Config, client: &Client) -> Vec<Provider> {
    let mut providers = Vec::new();

    if let Some(key) = usable_key("NewsAPI", &config.providers.newsapi) {
        providers.push(Provider::NewsApi(NewsApi::new(
            client.clone(),
            config.providers.newsapi.base_url_or(newsapi::DEFAULT_BASE_URL),
            key,
        )));
    }
    if let Some(key) = usable_key("Mediastack", &config.providers.mediastack) {
        providers.push(Provider::Mediastack(Mediastack::new(
            client.clone(),
            config
                .providers
                .mediastack
                .base_url_or(mediastack::DEFAULT_BASE_URL),
            key,
        )));
    }
    if let Some(key) = usable_key("GNews", &config.providers.gnews) {
        providers.push(Provider::GNews(GNews::new(
            client.clone(),
            config.providers.gnews.base_url_or(gnews::DEFAULT_BASE_URL),
            key,
        )));
    }

    info!(count = providers.len(), "Configured news providers");
    providers
}

fn usable_key(name: &str, provider: &ProviderConfig) -> Option<String> {
    if !provider.enabled {
        info!(source = name, "Provider disabled in config");
        return None;
    }
    match provider.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => Some(key.to_string()),
        _ => {
            warn!(source = name, "No API key configured; skipping provider");
            None
        }
    }
}

/// Run one request/decode round trip for an adapter.
///
/// `endpoint` is the already-built request URL (or the error from building
/// it). `parse` maps the response body into articles, using `fetched_at` as
/// the fallback publication time. Every failure is logged and absorbed.
pub(crate) async fn fetch_articles<F>(
    client: &Client,
    source: &str,
    endpoint: Result<Url, url::ParseError>,
    parse: F,
) -> Vec<Article>
where
    F: FnOnce(&str, DateTime<Utc>) -> Result<Vec<Article>, serde_json::Error>,
{
    let url = match endpoint {
        Ok(url) => url,
        Err(e) => {
            warn!(source, error = %e, "Invalid endpoint URL; skipping source");
            return Vec::new();
        }
    };

    let fetched_at = Utc::now();
    let body = match get_body(client, url).await {
        Ok(body) => body,
        Err(e) => {
            warn!(source, error = %e, "Request failed; treating source as empty");
            return Vec::new();
        }
    };

    match parse(&body, fetched_at) {
        Ok(articles) => {
            info!(source, count = articles.len(), "Fetched articles");
            articles
        }
        Err(e) => {
            warn!(
                source,
                error = %e,
                body_preview = %truncate_for_log(&body, 300),
                "Response did not match the expected shape; treating source as empty"
            );
            Vec::new()
        }
    }
}

// The URL carries the API key, so it is stripped from every error.
async fn get_body(client: &Client, url: Url) -> Result<String, Box<dyn Error>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {status}").into());
    }
    Ok(response.text().await.map_err(reqwest::Error::without_url)?)
}

/// Keep a title only if it has visible text.
pub(crate) fn usable_title(title: String) -> Option<String> {
    (!title.trim().is_empty()).then_some(title)
}

/// Parse an ISO-8601 / RFC 3339 timestamp, falling back to `fallback`.
pub(crate) fn parse_timestamp(raw: &str, fallback: DateTime<Utc>) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            debug!(raw, error = %e, "Unparsable timestamp; using fetch time");
            fallback
        }
    }
}

/// Keep a description only if it has visible text.
pub(crate) fn usable_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fallback() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_timestamp_zulu() {
        let dt = parse_timestamp("2025-05-06T14:30:00Z", fallback());
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 5, 6, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_offset() {
        let dt = parse_timestamp("2025-05-06T20:00:00+05:30", fallback());
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 5, 6, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_falls_back() {
        assert_eq!(parse_timestamp("yesterday", fallback()), fallback());
        assert_eq!(parse_timestamp("", fallback()), fallback());
    }

    #[test]
    fn test_usable_description() {
        assert_eq!(usable_description(None), None);
        assert_eq!(usable_description(Some("  ".to_string())), None);
        assert_eq!(
            usable_description(Some("Text".to_string())),
            Some("Text".to_string())
        );
    }

    #[test]
    fn test_usable_title() {
        assert_eq!(usable_title(String::new()), None);
        assert_eq!(usable_title(" \t ".to_string()), None);
        assert_eq!(usable_title("Headline".to_string()), Some("Headline".to_string()));
    }

    #[tokio::test]
    async fn test_get_body_error_omits_api_key() {
        let url = Url::parse_with_params(
            "http://127.0.0.1:1/api/v4/top-headlines",
            &[("country", "in"), ("token", "SUPERSECRET")],
        )
        .unwrap();

        let err = get_body(&Client::new(), url).await.unwrap_err();
        let rendered = format!("{err} {err:?}");
        assert!(!rendered.contains("SUPERSECRET"));
        assert!(!rendered.contains("token="));
    }

    #[test]
    fn test_build_providers_skips_missing_keys_and_disabled() {
        let mut config = Config::default();
        config.providers.newsapi.api_key = Some("news-key".to_string());
        config.providers.mediastack.api_key = Some("media-key".to_string());
        config.providers.mediastack.enabled = false;
        config.providers.gnews.api_key = Some("   ".to_string());

        let providers = build_providers(&config, &Client::new());
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].name(), "NewsAPI");
    }

    #[test]
    fn test_build_providers_keeps_adapter_order() {
        let mut config = Config::default();
        config.providers.newsapi.api_key = Some("a".to_string());
        config.providers.mediastack.api_key = Some("b".to_string());
        config.providers.gnews.api_key = Some("c".to_string());

        let names: Vec<String> = build_providers(&config, &Client::new())
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["NewsAPI", "Mediastack", "GNews"]);
    }
}
