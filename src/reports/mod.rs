//! Rendering of SSC data for people and for other programs
//!
//! Every generator writes into a [`core::fmt::Write`] sink so callers decide where the text goes.
//! Pending-approval results can be rendered three ways, picked with [`OutputFormat`]:
//!
//! - **Table**: bordered grid for the terminal; with details, the status column is replaced by
//!   the normalized messages, wrapped at 50 characters.
//! - **JSON**: a pretty-printed array of flat records.
//! - **CSV**: one quoted record per artifact with its messages.
//!
//! The remaining generators render the inventory commands (projects, versions, one version's
//! artifacts, one artifact's detail) as tables only.

mod approvals;
mod artifacts;
mod common;
mod csv;
mod detail;
mod json;
mod projects;
mod table;
mod versions;

pub use approvals::generate as generate_approvals_table;
pub use artifacts::generate as generate_artifacts_table;
pub use common::{filter_by_label, format_size_mb, format_upload_date};
pub use csv::generate as generate_csv;
pub use detail::generate as generate_artifact_detail;
pub use json::generate as generate_json;
pub use projects::generate as generate_projects_table;
pub use versions::generate as generate_versions_table;

use clap::ValueEnum;

/// How pending-approval results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Bordered table for the terminal
    #[default]
    Table,

    /// Pretty-printed JSON array
    Json,

    /// Comma-separated values with a header row
    Csv,
}

impl OutputFormat {
    /// Whether the output is meant for another program rather than a person.
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json | Self::Csv)
    }
}
