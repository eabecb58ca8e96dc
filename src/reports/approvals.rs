use super::common::{format_size_mb, format_upload_date};
use super::table::{Cell, Table};
use crate::Result;
use crate::messages;
use crate::models::{Artifact, StatusKind};
use core::fmt::Write;

/// Column width for the detailed view, which carries long message text.
const DETAILS_WRAP_WIDTH: usize = 50;

/// Render pending artifacts as a table; `details` swaps the status column for the messages.
pub fn generate<W: Write>(artifacts: &[Artifact], details: bool, use_colors: bool, writer: &mut W) -> Result<()> {
    let last_column = if details { "Processing Messages" } else { "Status" };
    let mut table = Table::new(&["Project", "Upload Date", "File Name", "Size (MB)", "Upload IP", last_column]);
    if details {
        table = table.wrap_at(DETAILS_WRAP_WIDTH).with_row_lines();
    }

    for artifact in artifacts {
        let last = if details {
            messages::normalize(artifact)
        } else {
            StatusKind::PendingApproval.to_string()
        };

        table.push([
            Cell::from(artifact.display_label()),
            Cell::from(format_upload_date(artifact.upload_date.as_ref())),
            Cell::from(artifact.file_name.as_str()),
            Cell::from(format_size_mb(artifact.file_size)),
            Cell::from(artifact.upload_ip.as_str()),
            Cell::from(last),
        ]);
    }

    table.render(use_colors, writer)
}
