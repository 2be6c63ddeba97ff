//! Turns the raw aggregate into the feed: dedupe, image filter, recency sort.

use crate::models::Article;
use itertools::Itertools;
use std::cmp::Reverse;
use tracing::{debug, instrument};

/// Produce the final ordered feed from an aggregation cycle.
///
/// 1. Collapse duplicates by [`Article::dedup_key`], keeping the first seen.
/// 2. Drop articles without a usable image.
/// 3. Sort by `published_at`, newest first. The sort is stable.
#[instrument(level = "info", skip_all, fields(input = articles.len()))]
pub fn process(articles: Vec<Article>) -> Vec<Article> {
    let input = articles.len();
    let unique = dedupe(articles);
    let deduped = unique.len();

    let mut feed = retain_with_images(unique);
    sort_by_recency(&mut feed);

    debug!(
        input,
        duplicates = input - deduped,
        without_image = deduped - feed.len(),
        output = feed.len(),
        "Processed feed"
    );
    feed
}

pub fn dedupe(articles: Vec<Article>) -> Vec<Article> {
    articles
        .into_iter()
        .unique_by(Article::dedup_key)
        .collect()
}

pub fn retain_with_images(mut articles: Vec<Article>) -> Vec<Article> {
    articles.retain(Article::has_image);
    articles
}

pub fn sort_by_recency(articles: &mut [Article]) {
    articles.sort_by_key(|a| Reverse(a.published_at));
}
