use super::de::null_as_default;
use serde::Deserialize;

/// The `{data, count, totalCount}` wrapper around every SSC listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Required; an explicit `null` decodes as an empty listing.
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<T>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: u64,
}

impl<T> Envelope<T> {
    /// Whether the server holds more records than it returned.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.total_count > self.data.len() as u64
    }
}
