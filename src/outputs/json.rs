//! JSON output for editions.
//!
//! Files are organized by date with edition names:
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── morning.json
//!     ├── afternoon.json
//!     └── evening.json
//! ```
//!
//! A second run in the same edition window overwrites the earlier file.

use crate::models::Edition;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize an edition as pretty-printed JSON.
pub fn render(edition: &Edition) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(edition)
}

/// Write an [`Edition`] to `{json_output_dir}/{date}/{time_of_day}.json`.
///
/// # Arguments
///
/// * `edition` - The feed to serialize
/// * `json_output_dir` - Base directory for JSON output
///
/// # Returns
///
/// The path written, or an error if directory creation or file writing fails.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_edition(
    edition: &Edition,
    json_output_dir: &str,
) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string(edition)?;

    let full_json_dir = format!(
        "{}/{}",
        json_output_dir.trim_end_matches('/'),
        edition.local_date
    );
    info!(%full_json_dir, "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(%full_json_dir, error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = format!("{}/{}.json", full_json_dir, edition.time_of_day);
    fs::write(&output_json_filename, json).await?;
    info!(
        path = %output_json_filename,
        articles = edition.articles.len(),
        "Wrote JSON edition"
    );

    Ok(output_json_filename)
}
