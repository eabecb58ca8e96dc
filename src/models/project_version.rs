use super::Project;
use super::de::null_as_default;
use serde::Deserialize;

/// A tracked release or branch under a project; the unit artifacts belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectVersion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Owning project; absent when the listing did not embed it.
    #[serde(default)]
    pub project: Option<Project>,
}

impl ProjectVersion {
    /// Name of the owning project, or an empty string when it is unresolved.
    #[must_use]
    pub fn project_name(&self) -> &str {
        self.project.as_ref().map_or("", |p| p.name.as_str())
    }

    /// The `"<project> - <version>"` label shown wherever a version is displayed.
    ///
    /// The separator is kept even when the project name is empty.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.project_name(), self.name)
    }
}
