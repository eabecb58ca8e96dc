//! Folding of an artifact's messages into one display string.

use crate::models::{Artifact, ArtifactMessages, Message};

/// Shown when an artifact has nothing to say.
pub const NO_MESSAGES: &str = "No processing messages available";

/// The artifact's message lines, in display order.
///
/// The free-form processing note comes first, followed by the entries of the `messages` payload.
#[must_use]
pub fn lines(artifact: &Artifact) -> Vec<String> {
    let mut lines = Vec::new();

    if !artifact.processing_messages.is_empty() {
        lines.push(artifact.processing_messages.clone());
    }

    match &artifact.messages {
        ArtifactMessages::Text(text) if !text.is_empty() => lines.push(text.clone()),
        ArtifactMessages::Entries(entries) => lines.extend(entries.iter().filter_map(Message::render)),
        ArtifactMessages::Text(_) | ArtifactMessages::Absent => {}
    }

    lines
}

/// Newline-joined message lines, or [`NO_MESSAGES`] when there are none.
#[must_use]
pub fn normalize(artifact: &Artifact) -> String {
    let lines = lines(artifact);
    if lines.is_empty() {
        return NO_MESSAGES.to_string();
    }

    lines.join("\n")
}
