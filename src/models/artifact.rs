use super::de::{null_as_default, timestamp};
use super::{ArtifactMessages, ArtifactStatus, ProjectVersion};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// An uploaded scan result file and its review status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub file_name: String,

    /// Size in bytes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_size: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ArtifactStatus,

    #[serde(default, deserialize_with = "timestamp")]
    pub upload_date: Option<DateTime<FixedOffset>>,

    #[serde(default, rename = "uploadIP", deserialize_with = "null_as_default")]
    pub upload_ip: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub artifact_type: String,

    #[serde(default)]
    pub messages: ArtifactMessages,

    /// Free-form processing notes, independent of `messages`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub processing_messages: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub approval_required: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub approval_comment: String,

    #[serde(default)]
    pub project_version_id: Option<i64>,

    /// `"<project> - <version>"`, attached only when the artifact is found by the approval scan.
    #[serde(skip)]
    pub project_version_name: Option<String>,
}

impl Artifact {
    #[must_use]
    pub fn requires_approval(&self) -> bool {
        self.status.is_pending_approval()
    }

    /// Attach the owning version's id and display label.
    pub fn attach_version(&mut self, version: &ProjectVersion) {
        self.project_version_id = Some(version.id);
        self.project_version_name = Some(version.display_label());
    }

    /// The denormalized label, or an empty string when the artifact was not found by the scan.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.project_version_name.as_deref().unwrap_or_default()
    }
}
