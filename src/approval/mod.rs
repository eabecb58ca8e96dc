//! Organization-wide scan for artifacts pending approval
//!
//! The scan lists every project version in the system, fetches each version's artifacts, keeps
//! the ones whose status classifies as pending approval, and stamps each survivor with the id and
//! `"<project> - <version>"` label of the version it came from.
//!
//! # Failure policy
//!
//! Only the initial version listing can fail the scan. Each version is a separate unit of work
//! whose outcome is a [`VersionScan`]: a version whose artifacts cannot be fetched or decoded is
//! skipped, logged, and contributes nothing, so the result is identical to a scan in which that
//! version never existed.
//!
//! # Ordering
//!
//! Results come out in version listing order, then artifact order within a version. Versions may
//! be fetched concurrently ([`ScanOptions::concurrency`]), but completed work is consumed in
//! submission order so the output does not depend on which request finishes first.

mod aggregator;
mod progress;

pub use aggregator::{ArtifactSource, ScanOptions, VersionScan, find_artifacts_requiring_approval, scan_version};
pub use progress::Progress;
