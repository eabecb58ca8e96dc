use super::common::{format_size_mb, format_upload_date};
use crate::Result;
use crate::messages;
use crate::models::{Artifact, StatusKind};
use core::fmt::Write;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonArtifact<'a> {
    project: &'a str,
    upload_date: String,
    file_name: &'a str,
    file_size_bytes: u64,
    file_size_mb: String,
    upload_ip: &'a str,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    messages: Option<String>,
}

/// Render pending artifacts as a pretty-printed JSON array; messages are included only with `details`.
pub fn generate<W: Write>(artifacts: &[Artifact], details: bool, writer: &mut W) -> Result<()> {
    let records: Vec<JsonArtifact<'_>> = artifacts
        .iter()
        .map(|artifact| JsonArtifact {
            project: artifact.display_label(),
            upload_date: format_upload_date(artifact.upload_date.as_ref()),
            file_name: &artifact.file_name,
            file_size_bytes: artifact.file_size,
            file_size_mb: format_size_mb(artifact.file_size),
            upload_ip: &artifact.upload_ip,
            status: StatusKind::PendingApproval.to_string(),
            messages: details.then(|| messages::normalize(artifact)),
        })
        .collect();

    writeln!(writer, "{}", serde_json::to_string_pretty(&records)?)?;
    Ok(())
}
