//! Output generation for a finished feed.
//!
//! # Submodules
//!
//! - [`json`]: Writes an [`Edition`] to a dated JSON file
//! - [`text`]: Renders the feed as a plain-text listing for the terminal
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── morning.json
//!     ├── afternoon.json
//!     └── evening.json
//! ```

use crate::classifier::CategoryClassifier;
use crate::models::{Article, Edition, FeedEntry};
use crate::utils::time_of_day_at;
use chrono::{DateTime, Local};

pub mod json;
pub mod text;

/// Package a processed feed as an edition stamped with the current local time.
///
/// Each entry gets its content key and its resolved category label.
pub fn build_edition(articles: Vec<Article>, classifier: &CategoryClassifier) -> Edition {
    build_edition_at(articles, classifier, Local::now())
}

/// Same as [`build_edition`], stamped with `now`.
///
/// Date, edition label and time all derive from the one reading.
pub fn build_edition_at(
    articles: Vec<Article>,
    classifier: &CategoryClassifier,
    now: DateTime<Local>,
) -> Edition {
    Edition {
        local_date: now.date_naive().to_string(),
        time_of_day: time_of_day_at(now.time()).to_string(),
        local_time: now.time().format("%H:%M:%S").to_string(),
        articles: articles
            .into_iter()
            .map(|article| FeedEntry {
                key: article.content_key(),
                category: classifier.classify(&article),
                article,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_build_edition_resolves_categories_and_keys() {
        let classifier = CategoryClassifier::default();
        let a = Article::new(
            "Cricket World Cup Final",
            "India wins the match",
            "https://example.com/final",
            Some("final.jpg".to_string()),
            "ESPN",
            Utc::now(),
        );
        let expected_key = a.content_key();

        let edition = build_edition(vec![a], &classifier);
        assert_eq!(edition.articles.len(), 1);
        assert_eq!(edition.articles[0].category, "Sports");
        assert_eq!(edition.articles[0].key, expected_key);
        assert_eq!(edition.local_date.len(), 10);
        // the article itself is not mutated
        assert!(edition.articles[0].article.category.is_none());
    }

    #[test]
    fn test_build_edition_label_matches_stamp() {
        let now = Local.with_ymd_and_hms(2025, 7, 21, 7, 59, 59).unwrap();
        let edition = build_edition_at(Vec::new(), &CategoryClassifier::default(), now);
        assert_eq!(edition.local_date, "2025-07-21");
        assert_eq!(edition.time_of_day, "morning");
        assert_eq!(edition.local_time, "07:59:59");

        let now = Local.with_ymd_and_hms(2025, 7, 21, 16, 0, 0).unwrap();
        let edition = build_edition_at(Vec::new(), &CategoryClassifier::default(), now);
        assert_eq!(edition.time_of_day, "evening");
    }
}
