//! Reader-side narrowing of a processed feed by region, category and search text.

use crate::classifier::{Category, CategoryClassifier};
use crate::models::Article;
use clap::ValueEnum;

/// Which publishers to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Region {
    #[default]
    All,
    /// Sources whose name mentions India.
    Indian,
    /// Everything that is not `Indian`.
    Global,
}

impl Region {
    fn admits(&self, article: &Article) -> bool {
        let indian = article.source.to_lowercase().contains("india");
        match self {
            Region::All => true,
            Region::Indian => indian,
            Region::Global => !indian,
        }
    }
}

/// Combined feed filter. Every set criterion must pass.
#[derive(Debug, Clone, Default)]
pub struct FeedFilter {
    pub region: Region,
    pub category: Option<Category>,
    pub search: Option<String>,
}

impl FeedFilter {
    /// Keep the articles that pass, preserving feed order.
    pub fn apply(&self, classifier: &CategoryClassifier, articles: Vec<Article>) -> Vec<Article> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        articles
            .into_iter()
            .filter(|a| self.region.admits(a))
            .filter(|a| match self.category {
                Some(wanted) => classifier
                    .classify(a)
                    .eq_ignore_ascii_case(wanted.as_str()),
                None => true,
            })
            .filter(|a| match &needle {
                Some(needle) => matches_search(a, needle),
                None => true,
            })
            .collect()
    }
}

fn matches_search(article: &Article, needle: &str) -> bool {
    [&article.title, &article.description, &article.source]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
