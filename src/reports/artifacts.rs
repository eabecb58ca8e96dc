use super::common::{format_size_mb, format_upload_date, status_style};
use super::table::{Cell, Table};
use crate::Result;
use crate::models::Artifact;
use core::fmt::Write;

/// Render every artifact of one project version, whatever its status.
pub fn generate<W: Write>(artifacts: &[Artifact], use_colors: bool, writer: &mut W) -> Result<()> {
    let mut table = Table::new(&["ID", "File Name", "Status", "Upload Date", "Size (MB)", "Upload IP"]);
    for artifact in artifacts {
        table.push([
            Cell::from(artifact.id.to_string()),
            Cell::from(artifact.file_name.as_str()),
            Cell::styled(artifact.status.as_str(), status_style(artifact.status.kind())),
            Cell::from(format_upload_date(artifact.upload_date.as_ref())),
            Cell::from(format_size_mb(artifact.file_size)),
            Cell::from(artifact.upload_ip.as_str()),
        ]);
    }

    table.render(use_colors, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArtifactStatus;
    use owo_colors::OwoColorize;

    fn artifact(id: i64, status: &str) -> Artifact {
        Artifact {
            id,
            file_name: format!("{id}.fpr"),
            status: ArtifactStatus::new(status),
            ..Artifact::default()
        }
    }

    #[test]
    fn test_statuses_are_coloured_by_kind() {
        let artifacts = [artifact(1, "REQUIRE_AUTH"), artifact(2, "Complete"), artifact(3, "ERROR_PROCESSING")];

        let mut plain = String::new();
        generate(&artifacts, false, &mut plain).unwrap();
        assert!(plain.contains("| REQUIRE_AUTH     |"));
        assert!(!plain.contains('\x1b'));

        let mut colored = String::new();
        generate(&artifacts, true, &mut colored).unwrap();
        assert!(colored.contains(&"REQUIRE_AUTH".red().to_string()));
        assert!(colored.contains(&"Complete".green().to_string()));
        assert!(colored.contains("| ERROR_PROCESSING |"));
    }
}
