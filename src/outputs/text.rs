//! Plain-text rendering of an edition for the terminal.

use crate::models::Edition;
use crate::utils::upcase;
use std::fmt::Write;

/// Render an edition as a numbered listing.
///
/// ```text
/// Morning edition, 2025-07-21 (2 articles)
///
///  1. [Sports] Cricket World Cup Final
///     ESPN · 2025-07-20 18:45 UTC
///     https://example.com/final
/// ```
pub fn render(edition: &Edition) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{} edition, {} ({})\n",
        upcase(&edition.time_of_day),
        edition.local_date,
        article_count(edition.articles.len())
    )
    .unwrap();

    for (i, entry) in edition.articles.iter().enumerate() {
        let a = &entry.article;
        writeln!(out, "{:>2}. [{}] {}", i + 1, entry.category, a.title.trim()).unwrap();
        writeln!(
            out,
            "    {} · {}",
            a.source,
            a.published_at.format("%Y-%m-%d %H:%M UTC")
        )
        .unwrap();
        writeln!(out, "    {}", a.url).unwrap();
    }
    out
}

fn article_count(n: usize) -> String {
    match n {
        1 => "1 article".to_string(),
        n => format!("{n} articles"),
    }
}
