use reqwest::StatusCode;

/// Failure of a single SSC API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("API request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The request never produced a response.
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not have the expected shape.
    #[error("could not decode {resource} response")]
    Decode {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Network { .. })
    }

    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// The HTTP status for a non-success response.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network { .. } | Self::Decode { .. } => None,
        }
    }
}
