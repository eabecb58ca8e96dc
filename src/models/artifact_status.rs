use core::fmt::{self, Display, Formatter};
use serde::Deserialize;

/// Status spellings the API uses for an artifact waiting on manual sign-off.
const PENDING_APPROVAL_STATUSES: [&str; 2] = ["REQUIRE_AUTH", "Requires Approval"];

/// Status spellings the API uses for an artifact that finished processing.
const PROCESSED_STATUSES: [&str; 2] = ["PROCESSED", "Complete"];

/// The logical review state behind an artifact's status string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display)]
pub enum StatusKind {
    #[strum(to_string = "Requires Approval")]
    PendingApproval,

    #[strum(to_string = "Processed")]
    Processed,

    #[default]
    #[strum(to_string = "Other")]
    Other,
}

impl StatusKind {
    /// Classify a raw status string.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if PENDING_APPROVAL_STATUSES.contains(&raw) {
            Self::PendingApproval
        } else if PROCESSED_STATUSES.contains(&raw) {
            Self::Processed
        } else {
            Self::Other
        }
    }
}

/// An artifact status as sent by the server, classified once at decode time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct ArtifactStatus {
    raw: String,
    kind: StatusKind,
}

impl ArtifactStatus {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let kind = StatusKind::classify(&raw);
        Self { raw, kind }
    }

    #[must_use]
    pub const fn kind(&self) -> StatusKind {
        self.kind
    }

    /// The status exactly as the server spelled it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_pending_approval(&self) -> bool {
        self.kind == StatusKind::PendingApproval
    }
}

impl From<String> for ArtifactStatus {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl Display for ArtifactStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
