use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One structured entry of an artifact's message list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Short machine code; `None` when absent or empty.
    pub code: Option<String>,
    pub text: String,
}

impl Message {
    #[must_use]
    pub fn new(code: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            code: code.filter(|c| !c.is_empty()).map(str::to_string),
            text: text.into(),
        }
    }

    /// Build an entry from one element of the list payload; non-objects are ignored.
    fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };

        let text = fields.remove("message").and_then(coerce_to_string).unwrap_or_default();
        let code = fields.remove("code").and_then(coerce_to_string);

        Some(Self::new(code.as_deref(), text))
    }

    /// `"[code] text"` when a code is present, the bare text otherwise, nothing when the text is empty.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        if self.text.is_empty() {
            return None;
        }

        Some(match &self.code {
            Some(code) => format!("[{code}] {}", self.text),
            None => self.text.clone(),
        })
    }
}

/// The `messages` payload of an artifact, resolved from its structural shape.
///
/// The API sends a bare string, a list of `{code, message}` objects, or nothing. Any other shape
/// decodes as [`ArtifactMessages::Absent`] instead of failing the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ArtifactMessages {
    #[default]
    Absent,
    Text(String),
    Entries(Vec<Message>),
}

impl ArtifactMessages {
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::Entries(items.into_iter().filter_map(Message::from_value).collect()),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Object(_) => Self::Absent,
        }
    }
}

impl<'de> Deserialize<'de> for ArtifactMessages {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

fn coerce_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
