//! Mediastack live-news adapter.
//!
//! API: `https://api.mediastack.com/v1/news?access_key=<key>&countries=<cc>`
//!
//! Mediastack is stricter about what it keeps than the other providers:
//! an item needs both a description and a `published_at` value. Items
//! without a source are credited to "Mediastack".

use super::{
    NewsSource, fetch_articles, parse_timestamp, usable_description, usable_title,
};
use crate::models::Article;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.mediastack.com/v1/news";

const FALLBACK_SOURCE: &str = "Mediastack";

#[derive(Debug, Deserialize)]
struct MediastackResponse {
    data: Vec<MediastackArticle>,
}

#[derive(Debug, Deserialize)]
struct MediastackArticle {
    title: String,
    description: Option<String>,
    url: String,
    image: Option<String>,
    source: Option<String>,
    published_at: Option<String>,
}

impl MediastackArticle {
    fn into_article(self, fetched_at: DateTime<Utc>) -> Option<Article> {
        let title = usable_title(self.title)?;
        let description = usable_description(self.description)?;
        let published_at = self.published_at?;
        Some(Article::new(
            title,
            description,
            self.url,
            self.image,
            self.source.unwrap_or_else(|| FALLBACK_SOURCE.to_string()),
            parse_timestamp(&published_at, fetched_at),
        ))
    }
}

/// Map a Mediastack response body into articles.
pub fn parse_articles(
    body: &str,
    fetched_at: DateTime<Utc>,
) -> Result<Vec<Article>, serde_json::Error> {
    let decoded: MediastackResponse = serde_json::from_str(body)?;
    Ok(decoded
        .data
        .into_iter()
        .filter_map(|a| a.into_article(fetched_at))
        .collect())
}

#[derive(Debug, Clone)]
pub struct Mediastack {
    client: Client,
    base_url: String,
    access_key: String,
}

impl Mediastack {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            access_key: access_key.into(),
        }
    }

    fn endpoint(&self, country: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &self.base_url,
            &[("access_key", self.access_key.as_str()), ("countries", country)],
        )
    }
}

impl NewsSource for Mediastack {
    fn name(&self) -> &str {
        "Mediastack"
    }

    #[instrument(level = "info", skip_all, fields(source = "Mediastack", country = %country))]
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mockito::Matcher;

    const PAYLOAD: &str = r#"{
        "pagination": {"limit": 25, "offset": 0, "count": 4, "total": 4},
        "data": [
            {
                "author": null,
                "title": "ISRO readies next launch",
                "description": "The space agency confirmed the window.",
                "url": "https://example.com/isro",
                "source": "Times of India",
                "image": "https://example.com/isro.jpg",
                "category": "science",
                "language": "en",
                "country": "in",
                "published_at": "2025-07-21T10:15:00+00:00"
            },
            {
                "title": "No timestamp",
                "description": "Dropped because published_at is missing.",
                "url": "https://example.com/no-ts",
                "source": "Somewhere",
                "image": null,
                "published_at": null
            },
            {
                "title": "No description",
                "description": null,
                "url": "https://example.com/no-desc",
                "source": "Somewhere",
                "image": null,
                "published_at": "2025-07-21T10:15:00+00:00"
            },
            {
                "title": "Anonymous wire copy",
                "description": "Source was not supplied.",
                "url": "https://example.com/wire",
                "source": null,
                "image": "https://example.com/wire.jpg",
                "published_at": "2025-07-21T09:00:00+00:00"
            }
        ]
    }"#;

    fn fetched_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 21, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_applies_quality_gate() {
        let articles = parse_articles(PAYLOAD, fetched_at()).unwrap();
        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["ISRO readies next launch", "Anonymous wire copy"]);
    }

    #[test]
    fn test_parse_maps_fields() {
        let articles = parse_articles(PAYLOAD, fetched_at()).unwrap();
        let first = &articles[0];
        assert_eq!(first.source, "Times of India");
        assert_eq!(first.image_url.as_deref(), Some("https://example.com/isro.jpg"));
        assert_eq!(
            first.published_at,
            Utc.with_ymd_and_hms(2025, 7, 21, 10, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_missing_source_falls_back() {
        let articles = parse_articles(PAYLOAD, fetched_at()).unwrap();
        assert_eq!(articles[1].source, "Mediastack");
    }

    #[test]
    fn test_parse_wrong_shape_is_error() {
        let body = r#"{"error":{"code":"invalid_access_key","message":"bad key"}}"#;
        assert!(parse_articles(body, fetched_at()).is_err());
    }

    #[test]
    fn test_parse_drops_blank_title() {
        let body = r#"{"data":[{"title":"   ","description":"Has text","url":"https://example.com/a","image":"https://example.com/i.jpg","source":"X","published_at":"2025-07-21T10:15:00+00:00"},{"title":"","description":"Has text","url":"https://example.com/b","image":"https://example.com/i.jpg","source":"X","published_at":"2025-07-21T10:15:00+00:00"}]}"#;
        let articles = parse_articles(body, fetched_at()).unwrap();
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_sends_access_key_and_countries() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/news")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("access_key".into(), "secret".into()),
                Matcher::UrlEncoded("countries".into(), "in".into()),
            ]))
            .with_status(200)
            .with_body(PAYLOAD)
            .create_async()
            .await;

        let source = Mediastack::new(Client::new(), format!("{}/v1/news", server.url()), "secret");
        let articles = source.fetch("in").await;

        mock.assert_async().await;
        assert_eq!(articles.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_empty() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/news")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let source = Mediastack::new(Client::new(), format!("{}/v1/news", server.url()), "secret");
        assert!(source.fetch("in").await.is_empty());
    }
}
