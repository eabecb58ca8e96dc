//! Typed projections of the remote SSC entities
//!
//! Every type here is a read-only snapshot produced by a decode operation and consumed within
//! the same process run. The remote payloads are loose: fields may be missing or `null`, and an
//! artifact's `messages` field comes in several shapes. Decoding absorbs that looseness so the
//! rest of the crate works with plain values:
//!
//! - [`ArtifactStatus`] classifies the free-form status string once, right after decode.
//! - [`ArtifactMessages`] resolves the polymorphic message payload into a tagged variant.
//! - [`Envelope`] is the `{data, count, totalCount}` wrapper around every listing.

mod artifact;
mod artifact_messages;
mod artifact_status;
mod de;
mod envelope;
mod project;
mod project_version;

pub use artifact::Artifact;
pub use artifact_messages::{ArtifactMessages, Message};
pub use artifact_status::{ArtifactStatus, StatusKind};
pub use de::parse_timestamp;
pub use envelope::Envelope;
pub use project::Project;
pub use project_version::ProjectVersion;
