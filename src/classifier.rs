//! Keyword-frequency topic classification.
//!
//! Articles that already carry a category keep it. Everything else is scored
//! against a keyword table: a category's score is the number of its keywords
//! found anywhere in the lowercased title and description, each keyword
//! counting once. The highest score wins, ties go to the category listed
//! first in [`Category::PRIORITY`], and an all-zero result is "General".

use crate::models::Article;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Topical categories, in tie-break priority order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum Category {
    Politics,
    Sports,
    Technology,
    Business,
    Entertainment,
    Health,
    Science,
    General,
}

impl Category {
    /// Scored categories, highest tie-break priority first.
    pub const PRIORITY: [Category; 7] = [
        Category::Politics,
        Category::Sports,
        Category::Technology,
        Category::Business,
        Category::Entertainment,
        Category::Health,
        Category::Science,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Politics => "Politics",
            Category::Sports => "Sports",
            Category::Technology => "Technology",
            Category::Business => "Business",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Science => "Science",
            Category::General => "General",
        }
    }

    fn default_keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Politics => &[
                "election", "government", "minister", "parliament", "president",
                "policy", "vote", "congress", "senate", "political", "lok sabha",
                "bjp", "democracy", "opposition",
            ],
            Category::Sports => &[
                "cricket", "football", "match", "tournament", "olympic", "world cup",
                "ipl", "tennis", "player", "championship", "league", "stadium",
                "medal", "coach",
            ],
            Category::Technology => &[
                "technology", "tech", "software", "smartphone", "artificial intelligence",
                "internet", "startup", "cyber", "gadget", "computer", "robot",
                "semiconductor", "5g",
            ],
            Category::Business => &[
                "business", "market", "stock", "economy", "company", "shares",
                "investment", "bank", "finance", "trade", "revenue", "profit",
                "sensex", "nifty", "gdp", "inflation",
            ],
            Category::Entertainment => &[
                "film", "movie", "bollywood", "actor", "actress", "music", "celebrity",
                "box office", "album", "concert", "hollywood", "web series", "trailer",
            ],
            Category::Health => &[
                "health", "hospital", "disease", "covid", "vaccine", "doctor",
                "medical", "virus", "patient", "wellness", "fitness", "outbreak",
            ],
            Category::Science => &[
                "science", "research", "space", "nasa", "isro", "scientist",
                "discovery", "climate", "planet", "physics", "experiment", "satellite",
            ],
            Category::General => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::PRIORITY
            .iter()
            .chain(std::iter::once(&Category::General))
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| format!("unknown category: {wanted}"))
    }
}

/// Assigns a category label to articles.
///
/// Built once and shared by reference; holds only the keyword table.
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    rules: Vec<(Category, Vec<String>)>,
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::with_overrides(&BTreeMap::new())
    }
}

impl CategoryClassifier {
    /// Build a classifier from a custom table.
    ///
    /// Rule order is the tie-break order. Keywords are lowercased.
    pub fn with_rules(rules: Vec<(Category, Vec<String>)>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|(c, kws)| (c, kws.into_iter().map(|k| k.to_lowercase()).collect()))
                .collect(),
        }
    }

    /// Default table with some categories' keyword lists replaced.
    ///
    /// Priority order is unchanged. `General` entries are ignored since it
    /// is the fallback, not a scored category.
    pub fn with_overrides(overrides: &BTreeMap<Category, Vec<String>>) -> Self {
        Self::with_rules(
            Category::PRIORITY
                .iter()
                .map(|c| {
                    let keywords = match overrides.get(c) {
                        Some(custom) => custom.clone(),
                        None => c.default_keywords().iter().map(|k| k.to_string()).collect(),
                    };
                    (*c, keywords)
                })
                .collect(),
        )
    }

    /// Label for `article`: its explicit category, or the keyword winner.
    pub fn classify(&self, article: &Article) -> String {
        match &article.category {
            Some(explicit) => explicit.clone(),
            None => self
                .score(&article.title, &article.description)
                .as_str()
                .to_string(),
        }
    }

    /// Keyword winner for a title/description pair.
    pub fn score(&self, title: &str, description: &str) -> Category {
        let text = format!("{title} {description}").to_lowercase();

        let mut best = Category::General;
        let mut best_score = 0;
        for (category, keywords) in &self.rules {
            let score = keywords
                .iter()
                .filter(|k| text.contains(k.as_str()))
                .count();
            // strict: earlier rules keep ties
            if score > best_score {
                best = *category;
                best_score = score;
            }
        }
        best
    }
}
