//! # Taza Khabar
//!
//! A headline aggregator that pulls top stories from NewsAPI, Mediastack and
//! GNews at the same time, merges them into one feed, and tags every story
//! with a topical category.
//!
//! ## Usage
//!
//! ```sh
//! NEWSAPI_KEY=... MEDIASTACK_KEY=... GNEWS_KEY=... taza_khabar --region indian
//! ```
//!
//! ## Architecture
//!
//! Each run is one aggregation cycle:
//! 1. **Fetching**: Every configured provider is queried concurrently; a
//!    failing provider contributes no articles instead of failing the run
//! 2. **Processing**: Duplicates (same title) collapse, stories without an
//!    image are dropped, and the rest are sorted newest first
//! 3. **Classifying**: Each story gets its explicit category or a
//!    keyword-scored one
//! 4. **Output**: The optional region/category/search filters narrow the
//!    feed, which is printed and optionally written as a dated JSON edition

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregator;
mod classifier;
mod cli;
mod config;
mod filters;
mod models;
mod outputs;
mod pipeline;
mod sources;
mod utils;

use aggregator::Aggregator;
use classifier::CategoryClassifier;
use cli::{Cli, OutputFormat};
use config::Config;
use filters::FeedFilter;
use outputs::{build_edition, json, text};
use utils::ensure_writable_dir;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init (stderr, so stdout carries only the feed) ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("taza_khabar starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.config, ?args.region, ?args.category, ?args.format, "Parsed CLI arguments");

    // ---- Load config ----
    let mut config = Config::load(args.config.as_deref()).await?;
    config.apply_cli(&args);

    // Early check: ensure JSON output dir is writable
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Fetch ----
    let mut client = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = config.timeout() {
        client = client.timeout(timeout);
    }
    let client = client.build()?;

    let providers = sources::build_providers(&config, &client);
    if providers.is_empty() {
        warn!("No providers configured; set NEWSAPI_KEY, MEDIASTACK_KEY or GNEWS_KEY");
    }
    let aggregator = Aggregator::new(providers);
    let articles = aggregator.fetch_all(&config.country).await;

    // ---- Process, classify, filter ----
    let feed = pipeline::process(articles);
    if feed.is_empty() {
        warn!(
            sources = aggregator.source_count(),
            "Aggregation produced no articles"
        );
        eprintln!("No news found. Please try again later.");
        return Ok(());
    }
    let classifier = CategoryClassifier::with_overrides(&config.keywords);
    let feed_filter = FeedFilter {
        region: args.region,
        category: args.category,
        search: args.search.clone(),
    };
    let feed = feed_filter.apply(&classifier, feed);
    info!(count = feed.len(), "Feed ready");

    if feed.is_empty() {
        info!("No articles match the requested filters");
        eprintln!("No news matches the selected filters.");
        return Ok(());
    }

    let mut edition = build_edition(feed, &classifier);

    // ---- JSON edition file ----
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = json::write_edition(&edition, dir).await {
            error!(error = %e, "Failed to write JSON edition");
        }
    }

    // ---- Stdout ----
    if let Some(limit) = args.limit {
        edition.articles.truncate(limit);
    }
    match args.format {
        OutputFormat::Text => print!("{}", text::render(&edition)),
        OutputFormat::Json => println!("{}", json::render(&edition)?),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = edition.articles.len(),
        "Execution complete"
    );

    Ok(())
}
