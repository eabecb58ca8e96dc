use super::{ApiError, Gateway};
use crate::approval::ArtifactSource;
use crate::models::{Artifact, Envelope, Project, ProjectVersion};
use serde::Deserialize;
use serde::de::DeserializeOwned;

const LOG_TARGET: &str = "repository";

const PAGE_LIMIT: &str = "200";
const ALL_VERSIONS_PAGE_LIMIT: &str = "500";

const PROJECT_FIELDS: &str = "id,name,description";
const VERSION_FIELDS: &str = "id,name";
const ALL_VERSION_FIELDS: &str = "id,name,project";

/// Typed accessors for the SSC resources this tool reads.
#[derive(Debug, Clone)]
pub struct Repository {
    gateway: Gateway,
}

/// The single-artifact endpoint answers with either the bare object or a `data` wrapper.
#[derive(Deserialize)]
#[serde(untagged)]
enum DetailPayload {
    Wrapped { data: Artifact },
    Bare(Artifact),
}

impl Repository {
    #[must_use]
    pub const fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.list("projects", &[("limit", PAGE_LIMIT), ("fields", PROJECT_FIELDS)]).await
    }

    pub async fn list_project_versions(&self, project_id: i64) -> Result<Vec<ProjectVersion>, ApiError> {
        let resource = format!("projects/{project_id}/versions");
        self.list(&resource, &[("limit", PAGE_LIMIT), ("fields", VERSION_FIELDS)]).await
    }

    /// Every version in the system, each with its owning project embedded.
    pub async fn list_all_project_versions(&self) -> Result<Vec<ProjectVersion>, ApiError> {
        self.list("projectVersions", &[("limit", ALL_VERSIONS_PAGE_LIMIT), ("fields", ALL_VERSION_FIELDS)])
            .await
    }

    pub async fn list_artifacts(&self, version_id: i64) -> Result<Vec<Artifact>, ApiError> {
        let resource = format!("projectVersions/{version_id}/artifacts");
        self.list(&resource, &[("limit", PAGE_LIMIT), ("embed", "messages")]).await
    }

    pub async fn artifact_details(&self, artifact_id: i64) -> Result<Artifact, ApiError> {
        let resource = format!("artifacts/{artifact_id}");
        let body = self.gateway.get(&resource, &[("embed", "messages")]).await?;

        let payload: DetailPayload = decode(&resource, &body)?;
        Ok(match payload {
            DetailPayload::Wrapped { data } | DetailPayload::Bare(data) => data,
        })
    }

    async fn list<T: DeserializeOwned>(&self, resource: &str, params: &[(&str, &str)]) -> Result<Vec<T>, ApiError> {
        let body = self.gateway.get(resource, params).await?;
        let envelope: Envelope<T> = decode(resource, &body)?;

        if envelope.is_truncated() {
            log::warn!(
                target: LOG_TARGET,
                "Listing of '{resource}' returned {} of {} records; the rest are not fetched",
                envelope.data.len(),
                envelope.total_count
            );
        }

        Ok(envelope.data)
    }
}

impl ArtifactSource for Repository {
    async fn project_versions(&self) -> Result<Vec<ProjectVersion>, ApiError> {
        self.list_all_project_versions().await
    }

    async fn artifacts(&self, version_id: i64) -> Result<Vec<Artifact>, ApiError> {
        self.list_artifacts(version_id).await
    }
}

fn decode<T: DeserializeOwned>(resource: &str, body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|source| ApiError::Decode {
        resource: resource.to_string(),
        source,
    })
}
