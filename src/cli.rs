//! Command-line interface definitions for Taza Khabar.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! API keys and the country code can also come from environment variables,
//! and every value here overrides the matching entry in the config file.

use crate::classifier::Category;
use crate::filters::Region;
use clap::{Parser, ValueEnum};

/// How the feed is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments for one aggregation cycle.
///
/// # Examples
///
/// ```sh
/// # Keys from the environment, Indian headlines
/// NEWSAPI_KEY=... GNEWS_KEY=... taza_khabar
///
/// # Only sports stories from Indian publishers, as JSON
/// taza_khabar --region indian --category sports --format json
///
/// # Also write a dated edition file
/// taza_khabar -c config.yaml -j ./editions
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a config.yaml file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Country code to request headlines for (default: in)
    #[arg(long, env = "NEWS_COUNTRY")]
    pub country: Option<String>,

    /// NewsAPI key
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub newsapi_key: Option<String>,

    /// Mediastack access key
    #[arg(long, env = "MEDIASTACK_KEY", hide_env_values = true)]
    pub mediastack_key: Option<String>,

    /// GNews token
    #[arg(long, env = "GNEWS_KEY", hide_env_values = true)]
    pub gnews_key: Option<String>,

    /// Only show publishers from this region
    #[arg(long, value_enum, default_value_t = Region::All)]
    pub region: Region,

    /// Only show articles in this category
    #[arg(long, value_enum)]
    pub category: Option<Category>,

    /// Only show articles whose title, description or source contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Maximum number of articles to print
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format for stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the edition as JSON under this directory
    #[arg(short, long)]
    pub json_output_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["taza_khabar"]);

        assert_eq!(cli.region, Region::All);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.category.is_none());
        assert!(cli.json_output_dir.is_none());
        assert!(cli.limit.is_none());
    }

    #[test]
    fn test_cli_filters() {
        let cli = Cli::parse_from([
            "taza_khabar",
            "--region",
            "indian",
            "--category",
            "sports",
            "-s",
            "kohli",
            "-l",
            "5",
        ]);

        assert_eq!(cli.region, Region::Indian);
        assert_eq!(cli.category, Some(Category::Sports));
        assert_eq!(cli.search.as_deref(), Some("kohli"));
        assert_eq!(cli.limit, Some(5));
    }

    #[test]
    fn test_cli_output_flags() {
        let cli = Cli::parse_from([
            "taza_khabar",
            "--format",
            "json",
            "-j",
            "/tmp/editions",
            "-c",
            "config.yaml",
        ]);

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.json_output_dir.as_deref(), Some("/tmp/editions"));
        assert_eq!(cli.config.as_deref(), Some("config.yaml"));
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["taza_khabar", "--category", "weather"]).is_err());
    }
}
