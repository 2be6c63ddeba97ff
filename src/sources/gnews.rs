//! GNews top-headlines adapter.
//!
//! API: `https://gnews.io/api/v4/top-headlines?country=<cc>&token=<key>`

use super::{
    NewsSource, fetch_articles, parse_timestamp, usable_description, usable_title,
};
use crate::models::Article;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4/top-headlines";

#[derive(Debug, Deserialize)]
struct GNewsResponse {
    articles: Vec<GNewsArticle>,
}

#[derive(Debug, Deserialize)]
struct GNewsArticle {
    title: String,
    description: Option<String>,
    url: String,
    image: Option<String>,
    source: GNewsSource,
    #[serde(rename = "publishedAt")]
    published_at: String,
}

#[derive(Debug, Deserialize)]
struct GNewsSource {
    name: String,
}

impl GNewsArticle {
    fn into_article(self, fetched_at: DateTime<Utc>) -> Option<Article> {
        let title = usable_title(self.title)?;
        let description = usable_description(self.description)?;
        Some(Article::new(
            title,
            description,
            self.url,
            self.image,
            self.source.name,
            parse_timestamp(&self.published_at, fetched_at),
        ))
    }
}

/// Map a GNews response body into articles.
pub fn parse_articles(
    body: &str,
    fetched_at: DateTime<Utc>,
) -> Result<Vec<Article>, serde_json::Error> {
    let decoded: GNewsResponse = serde_json::from_str(body)?;
    Ok(decoded
        .articles
        .into_iter()
        .filter_map(|a| a.into_article(fetched_at))
        .collect())
}

#[derive(Debug, Clone)]
pub struct GNews {
    client: Client,
    base_url: String,
    token: String,
}

impl GNews {
    pub fn new(client: Client, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    fn endpoint(&self, country: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &self.base_url,
            &[("country", country), ("token", self.token.as_str())],
        )
    }
}

impl NewsSource for GNews {
    fn name(&self) -> &str {
        "GNews"
    }

    #[instrument(level = "info", skip_all, fields(source = "GNews", country = %country))]
    async fn fetch(&self, country: &str) -> Vec<Article> {
        fetch_articles(
            &self.client,
            self.name(),
            self.endpoint(country),
            parse_articles,
        )
        .await
    }
}
