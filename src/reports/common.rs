//! Formatting helpers shared by the report generators.

use super::table::CellStyle;
use crate::models::{Artifact, StatusKind};
use chrono::{DateTime, FixedOffset};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Descriptions longer than this are cut down in the projects table.
pub const DESCRIPTION_LIMIT: usize = 50;

/// File size in mebibytes with two decimals.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "sizes are displayed with two decimals")]
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_MB)
}

/// `YYYY-MM-DD HH:MM:SS` in the offset the server reported, or empty when unknown.
#[must_use]
pub fn format_upload_date(date: Option<&DateTime<FixedOffset>>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

/// Keep artifacts whose display label contains `filter`, ignoring case.
///
/// An empty filter keeps everything.
#[must_use]
pub fn filter_by_label(artifacts: Vec<Artifact>, filter: &str) -> Vec<Artifact> {
    if filter.is_empty() {
        return artifacts;
    }

    let needle = filter.to_lowercase();
    artifacts
        .into_iter()
        .filter(|a| a.display_label().to_lowercase().contains(&needle))
        .collect()
}

/// Pending statuses are drawn red and finished ones green.
#[must_use]
pub const fn status_style(kind: StatusKind) -> CellStyle {
    match kind {
        StatusKind::PendingApproval => CellStyle::Red,
        StatusKind::Processed => CellStyle::Green,
        StatusKind::Other => CellStyle::Plain,
    }
}

/// Cut `text` to `limit` characters, replacing the tail with `...` when it is longer.
#[must_use]
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let keep = limit.saturating_sub(3);
    let mut result: String = text.chars().take(keep).collect();
    result.push_str("...");
    result
}
