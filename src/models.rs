//! Data models for aggregated news articles and the editions built from them.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Article`]: One headline in the common shape every provider is mapped into
//! - [`FeedEntry`]: An article paired with its stable content key and category
//! - [`Edition`]: The feed produced by a single aggregation cycle
//!
//! Articles carry a fresh [`Uuid`] per construction, so two fetches of the
//! same story never share an `id`. Anything that needs to recognise "the same
//! article" goes through [`Article::dedup_key`] or [`Article::content_key`].

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A news article in the provider-independent shape.
///
/// Adapters build these from provider JSON. The enrichment fields
/// (`category`, `summary`, `sentiment`) start empty and are left for
/// downstream collaborators to fill in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Per-instance identifier, never derived from content.
    pub id: Uuid,
    /// The headline.
    pub title: String,
    /// Short body or summary text supplied by the provider.
    pub description: String,
    /// Link to the full story.
    pub url: String,
    /// Lead image, if the provider supplied one.
    pub image_url: Option<String>,
    /// Publisher or provider name.
    pub source: String,
    /// Publication time, or the fetch time when the provider's value was unusable.
    pub published_at: DateTime<Utc>,
    /// Explicit topical category, when one has been assigned.
    pub category: Option<String>,
    /// AI-generated summary, when one has been assigned.
    pub summary: Option<String>,
    /// One-word sentiment label, when one has been assigned.
    pub sentiment: Option<String>,
}

impl Article {
    /// Create an article with a fresh id and no enrichment.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        image_url: Option<String>,
        source: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            url: url.into(),
            image_url,
            source: source.into(),
            published_at,
            category: None,
            summary: None,
            sentiment: None,
        }
    }

    /// Key used to collapse duplicates across providers.
    ///
    /// Two articles are duplicates when their titles match after trimming and
    /// collapsing whitespace runs. The URL is not part of the key,
    /// so the same wire story syndicated by different outlets collapses too.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // "  Budget  passed " and "Budget passed" share a key
    /// ```
    pub fn dedup_key(&self) -> String {
        WHITESPACE_RUN.replace_all(self.title.trim(), " ").into_owned()
    }

    /// Stable identity derived from title and URL.
    ///
    /// Returns the lowercase hex SHA-256 of the dedup key and URL. Unlike `id`
    /// this survives refetches, which makes it the key to persist against.
    pub fn content_key(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.dedup_key().as_bytes());
        hasher.update(b"\n");
        hasher.update(self.url.trim().as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Whether the article has a non-blank image URL.
    pub fn has_image(&self) -> bool {
        self.image_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

/// An article as emitted in an [`Edition`].
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedEntry {
    /// See [`Article::content_key`].
    pub key: String,
    /// The explicit or classified category label.
    pub category: String,
    /// The article itself.
    pub article: Article,
}

/// The output of one aggregation cycle.
///
/// # Edition Naming
///
/// The `time_of_day` field categorizes editions as:
/// - `"morning"`: 00:00 - 08:00
/// - `"afternoon"`: 08:00 - 16:00
/// - `"evening"`: 16:00 - 24:00
#[derive(Debug, Serialize, Deserialize)]
pub struct Edition {
    /// The local date in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The time of day category: "morning", "afternoon", or "evening".
    pub time_of_day: String,
    /// The local time the edition was assembled.
    pub local_time: String,
    /// Feed entries, most recent first.
    pub articles: Vec<FeedEntry>,
}
