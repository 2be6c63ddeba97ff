//! NewsAPI top-headlines adapter.
//!
//! API: `https://newsapi.org/v2/top-headlines?country=<cc>&apiKey=<key>`
//!
//! Items without a description are dropped. The payload must otherwise
//! match the documented shape; an error body (`{"status":"error",...}`)
//! has no `articles` array, fails to decode, and the source contributes
//! nothing to the cycle.

use super::{
    NewsSource, fetch_articles, parse_timestamp, usable_description, usable_title,
};
use crate::models::Article;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/top-headlines";

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    title: String,
    description: Option<String>,
    url: String,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
    source: NewsApiSource,
    #[serde(rename = "publishedAt")]
    published_at: String,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    name: String,
}

impl NewsApiArticle {
    fn into_article(self, fetched_at: DateTime<Utc>) -> Option<Article> {
        let title = usable_title(self.title)?;
        let description = usable_description(self.description)?;
        Some(Article::new(
            title,
            description,
            self.url,
            self.url_to_image,
            self.source.name,
            parse_timestamp(&self.published_at, fetched_at),
        ))
    }
}

/// Map a NewsAPI response body into articles.
pub fn parse_articles(
    body: &str,
    fetched_at: DateTime<Utc>,
) -> Result<Vec<Article>, serde_json::Error> {
    let decoded: NewsApiResponse = serde_json::from_str(body)?;
    Ok(decoded
        .articles
        .into_iter()
        .filter_map(|a| a.into_article(fetched_at))
        .collect())
}

/// NewsAPI source bound to one endpoint and key.
#[derive(Debug, Clone)]
pub struct NewsApi {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsApi {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, country: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &self.base_url,
            &[("country", country), ("apiKey", self.api_key.as_str())],
        )
    }
}

impl NewsSource for NewsApi {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    #[instrument(level = "info", skip_all, fields(source = "NewsAPI", country = %country))]
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
