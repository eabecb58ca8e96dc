use super::Progress;
use crate::models::{Artifact, ProjectVersion};
use crate::ssc::ApiError;
use core::num::NonZeroUsize;
use futures::StreamExt;
use futures::stream;

const LOG_TARGET: &str = "  approval";

/// How often the scan logs a running count of checked versions.
const PROGRESS_LOG_INTERVAL: usize = 10;

/// The two fetches the approval scan depends on.
///
/// [`crate::ssc::Repository`] is the production implementation; tests substitute canned data.
pub trait ArtifactSource: Sync {
    /// Every project version in the system, with owning projects embedded.
    fn project_versions(&self) -> impl Future<Output = Result<Vec<ProjectVersion>, ApiError>> + Send;

    /// The artifacts uploaded to one project version.
    fn artifacts(&self, version_id: i64) -> impl Future<Output = Result<Vec<Artifact>, ApiError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Maximum number of artifact listings in flight at once; 1 scans strictly sequentially.
    pub concurrency: NonZeroUsize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            concurrency: NonZeroUsize::MIN,
        }
    }
}

/// Outcome of scanning a single project version.
#[derive(Debug)]
pub enum VersionScan {
    /// The version's pending artifacts, already labelled. May be empty.
    Scanned(Vec<Artifact>),

    /// The version's artifacts could not be fetched; it contributes nothing.
    Skipped(ApiError),
}

impl VersionScan {
    /// The artifacts this version contributes to the overall result.
    #[must_use]
    pub fn into_artifacts(self) -> Vec<Artifact> {
        match self {
            Self::Scanned(artifacts) => artifacts,
            Self::Skipped(_) => Vec::new(),
        }
    }
}

/// Fetch one version's artifacts and keep those pending approval, labelled with the version.
pub async fn scan_version<S: ArtifactSource>(source: &S, version: &ProjectVersion) -> VersionScan {
    log::debug!(target: LOG_TARGET, "Fetching artifacts for version {} ({})", version.id, version.display_label());

    match source.artifacts(version.id).await {
        Ok(artifacts) => VersionScan::Scanned(
            artifacts
                .into_iter()
                .filter(Artifact::requires_approval)
                .map(|mut artifact| {
                    artifact.attach_version(version);
                    artifact
                })
                .collect(),
        ),
        Err(e) => VersionScan::Skipped(e),
    }
}

/// Scan every project version for artifacts pending approval.
///
/// Fails only when the version listing itself fails. An empty result is a success.
pub async fn find_artifacts_requiring_approval<S: ArtifactSource>(
    source: &S,
    options: ScanOptions,
    progress: &dyn Progress,
) -> Result<Vec<Artifact>, ApiError> {
    progress.set_phase("Listing");
    let versions = source.project_versions().await?;
    let total = versions.len();

    log::info!(target: LOG_TARGET, "Scanning {total} project versions");
    progress.set_phase("Scanning");
    progress.set_total(total as u64);

    let mut scans = stream::iter(&versions)
        .map(|version| async move { (version, scan_version(source, version).await) })
        .buffered(options.concurrency.get());

    let mut found = Vec::new();
    let mut checked = 0;
    while let Some((version, scan)) = scans.next().await {
        checked += 1;
        progress.advance();

        if let VersionScan::Skipped(e) = &scan {
            log::warn!(target: LOG_TARGET, "Skipping version {} ({}): {e}", version.id, version.display_label());
        }
        found.extend(scan.into_artifacts());

        if checked % PROGRESS_LOG_INTERVAL == 0 {
            log::info!(target: LOG_TARGET, "Checked {checked}/{total} project versions, {} pending so far", found.len());
        }
    }

    log::info!(target: LOG_TARGET, "Found {} artifacts pending approval across {total} versions", found.len());
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArtifactStatus, Project};
    use reqwest::StatusCode;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct NoOpProgress;

    impl Progress for NoOpProgress {
        fn set_phase(&self, _phase: &str) {}
        fn set_total(&self, _total: u64) {}
        fn advance(&self) {}
        fn done(&self) {}
    }

    #[derive(Debug, Default)]
    struct CountingProgress {
        total: Mutex<u64>,
        advanced: Mutex<u64>,
    }

    impl Progress for CountingProgress {
        fn set_phase(&self, _phase: &str) {}
        fn set_total(&self, total: u64) {
            *self.total.lock().unwrap() = total;
        }
        fn advance(&self) {
            *self.advanced.lock().unwrap() += 1;
        }
        fn done(&self) {}
    }

    /// Canned versions and per-version artifact listings; a missing entry answers 404.
    #[derive(Debug, Default)]
    struct FakeSource {
        versions: Vec<ProjectVersion>,
        artifacts: HashMap<i64, Vec<Artifact>>,
        /// Versions whose artifact listing answers with an undecodable body.
        malformed: Vec<i64>,
        listing_fails: bool,
        /// Earlier versions yield more often so they finish last under concurrency.
        stagger: bool,
    }

    impl FakeSource {
        fn with_version(mut self, id: i64, project: Option<&str>, name: &str, artifacts: Option<Vec<Artifact>>) -> Self {
            self.versions.push(version(id, project, name));
            if let Some(artifacts) = artifacts {
                let _ = self.artifacts.insert(id, artifacts);
            }
            self
        }

        fn with_malformed_version(mut self, id: i64, project: Option<&str>, name: &str) -> Self {
            self.versions.push(version(id, project, name));
            self.malformed.push(id);
            self
        }
    }

    impl ArtifactSource for FakeSource {
        async fn project_versions(&self) -> Result<Vec<ProjectVersion>, ApiError> {
            if self.listing_fails {
                return Err(status_error(StatusCode::UNAUTHORIZED));
            }
            Ok(self.versions.clone())
        }

        async fn artifacts(&self, version_id: i64) -> Result<Vec<Artifact>, ApiError> {
            if self.stagger {
                for _ in 0..(100 - version_id) {
                    tokio::task::yield_now().await;
                }
            }
            if self.malformed.contains(&version_id) {
                return Err(ApiError::Decode {
                    resource: format!("projectVersions/{version_id}/artifacts"),
                    source: serde_json::from_str::<Vec<Artifact>>("<html>").unwrap_err(),
                });
            }
            self.artifacts
                .get(&version_id)
                .cloned()
                .ok_or_else(|| status_error(StatusCode::NOT_FOUND))
        }
    }

    fn status_error(status: StatusCode) -> ApiError {
        ApiError::Status {
            status,
            body: String::new(),
        }
    }

    fn version(id: i64, project: Option<&str>, name: &str) -> ProjectVersion {
        ProjectVersion {
            id,
            name: name.to_string(),
            project: project.map(|p| Project {
                id: id * 100,
                name: p.to_string(),
                description: String::new(),
            }),
        }
    }

    fn artifact(id: i64, status: &str) -> Artifact {
        Artifact {
            id,
            file_name: format!("scan-{id}.fpr"),
            status: ArtifactStatus::new(status),
            ..Artifact::default()
        }
    }

    fn ids(artifacts: &[Artifact]) -> Vec<i64> {
        artifacts.iter().map(|a| a.id).collect()
    }

    async fn scan(source: &FakeSource) -> Result<Vec<Artifact>, ApiError> {
        find_artifacts_requiring_approval(source, ScanOptions::default(), &NoOpProgress).await
    }

    #[tokio::test]
    async fn test_only_pending_artifacts_are_kept() {
        let source = FakeSource::default().with_version(
            1,
            Some("Portal"),
            "1.0",
            Some(vec![
                artifact(10, "REQUIRE_AUTH"),
                artifact(11, "PROCESSED"),
                artifact(12, "Requires Approval"),
                artifact(13, "require_auth"),
                artifact(14, ""),
            ]),
        );

        let found = scan(&source).await.unwrap();
        assert_eq!(ids(&found), vec![10, 12]);
        assert!(found.iter().all(Artifact::requires_approval));
    }

    #[tokio::test]
    async fn test_found_artifacts_are_labelled() {
        let source = FakeSource::default()
            .with_version(1, Some("MyProject"), "v1", Some(vec![artifact(10, "REQUIRE_AUTH")]))
            .with_version(2, None, "v2", Some(vec![artifact(20, "Requires Approval")]));

        let found = scan(&source).await.unwrap();
        assert_eq!(found[0].display_label(), "MyProject - v1");
        assert_eq!(found[0].project_version_id, Some(1));
        assert_eq!(found[1].display_label(), " - v2");
        assert_eq!(found[1].project_version_id, Some(2));
    }

    #[tokio::test]
    async fn test_failed_version_equals_omitted_version() {
        let with_failure = FakeSource::default()
            .with_version(1, Some("A"), "1", Some(vec![artifact(10, "REQUIRE_AUTH")]))
            .with_version(2, Some("B"), "1", None)
            .with_version(3, Some("C"), "1", Some(vec![artifact(30, "REQUIRE_AUTH")]));

        let without = FakeSource::default()
            .with_version(1, Some("A"), "1", Some(vec![artifact(10, "REQUIRE_AUTH")]))
            .with_version(3, Some("C"), "1", Some(vec![artifact(30, "REQUIRE_AUTH")]));

        let a = scan(&with_failure).await.unwrap();
        let b = scan(&without).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(ids(&a), vec![10, 30]);
    }

    #[tokio::test]
    async fn test_undecodable_version_is_skipped() {
        let source = FakeSource::default()
            .with_version(1, Some("A"), "1", Some(vec![artifact(10, "REQUIRE_AUTH")]))
            .with_malformed_version(2, Some("B"), "1")
            .with_version(3, Some("C"), "1", Some(vec![artifact(30, "Requires Approval")]));

        let found = scan(&source).await.unwrap();
        assert_eq!(ids(&found), vec![10, 30]);

        let skipped = scan_version(&source, &version(2, Some("B"), "1")).await;
        assert!(matches!(&skipped, VersionScan::Skipped(e) if e.is_decode()));
    }

    #[tokio::test]
    async fn test_nothing_pending_is_success() {
        let source = FakeSource::default()
            .with_version(1, Some("A"), "1", Some(vec![artifact(10, "PROCESSED")]))
            .with_version(2, Some("B"), "1", Some(Vec::new()));
        assert!(scan(&source).await.unwrap().is_empty());

        assert!(scan(&FakeSource::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_failure_is_fatal() {
        let source = FakeSource {
            listing_fails: true,
            ..FakeSource::default()
        }
        .with_version(1, Some("A"), "1", Some(vec![artifact(10, "REQUIRE_AUTH")]));

        let err = scan(&source).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_concurrent_scan_keeps_listing_order() {
        let mut source = FakeSource {
            stagger: true,
            ..FakeSource::default()
        };
        for id in 1..=8 {
            source = source.with_version(
                id,
                Some("P"),
                &id.to_string(),
                Some(vec![artifact(id * 10, "REQUIRE_AUTH"), artifact(id * 10 + 1, "REQUIRE_AUTH")]),
            );
        }

        let options = ScanOptions {
            concurrency: NonZeroUsize::new(4).unwrap(),
        };
        let found = find_artifacts_requiring_approval(&source, options, &NoOpProgress).await.unwrap();
        let sequential = scan(&source).await.unwrap();

        assert_eq!(found, sequential);
        assert_eq!(ids(&found)[..4], [10, 11, 20, 21]);
        assert_eq!(found.len(), 16);
    }

    #[tokio::test]
    async fn test_progress_counts_every_version() {
        let source = FakeSource::default()
            .with_version(1, Some("A"), "1", Some(Vec::new()))
            .with_version(2, Some("B"), "1", None)
            .with_version(3, Some("C"), "1", Some(Vec::new()));

        let progress = CountingProgress::default();
        let _ = find_artifacts_requiring_approval(&source, ScanOptions::default(), &progress).await.unwrap();
        assert_eq!(*progress.total.lock().unwrap(), 3);
        assert_eq!(*progress.advanced.lock().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_scan_version_outcomes() {
        let source = FakeSource::default().with_version(1, Some("A"), "1", Some(vec![artifact(10, "REQUIRE_AUTH")]));

        let scanned = scan_version(&source, &version(1, Some("A"), "1")).await;
        assert!(matches!(&scanned, VersionScan::Scanned(a) if a.len() == 1));

        let skipped = scan_version(&source, &version(2, Some("A"), "2")).await;
        assert!(matches!(&skipped, VersionScan::Skipped(e) if e.is_transport()));
        assert!(skipped.into_artifacts().is_empty());
    }
}
