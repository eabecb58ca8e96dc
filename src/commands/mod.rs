//! Command-line interface and orchestration for ssc-approver
//!
//! This module parses arguments with clap, resolves the connection settings once per
//! invocation, and drives the repository, the approval scan, and the report generators.
//!
//! # Commands
//!
//! - **list**: scan every project version for artifacts pending approval, optionally filter by
//!   project label, and render as a table, JSON, or CSV
//! - **projects**: list every project
//! - **versions**: list the versions of one project
//! - **artifacts**: list every artifact of one project version, with coloured statuses
//! - **artifact**: show one artifact's details and messages
//!
//! # Failures
//!
//! A configuration or fetch failure is printed in red on the error stream, the host is asked to
//! exit with status 1, and the error is returned to the caller. An empty result is not a failure.

mod artifact;
mod artifacts;
mod common;
mod host;
mod list;
mod progress_reporter;
mod projects;
mod run;
mod versions;

pub use artifact::{ArtifactArgs, show_artifact};
pub use artifacts::{ArtifactsArgs, list_artifacts};
pub use common::{ColorMode, GlobalArgs, LogLevel};
pub use host::Host;
pub use list::{ListArgs, list_pending};
pub use progress_reporter::ProgressReporter;
pub use projects::list_projects;
pub use run::run;
pub use versions::{VersionsArgs, list_versions};

#[cfg(test)]
pub use host::TestHost;
