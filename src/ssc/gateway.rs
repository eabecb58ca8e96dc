use super::ApiError;
use crate::Result;
use crate::config::Config;
use bytes::Bytes;
use core::time::Duration;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

const LOG_TARGET: &str = "   gateway";
const API_PREFIX: &str = "ssc/api/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Authenticated, read-only access to the SSC REST API.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
}

impl Gateway {
    pub fn new(config: &Config) -> Result<Self> {
        let mut auth_val = HeaderValue::from_str(&format!("FortifyToken {}", config.token))?;
        auth_val.set_sensitive(true);

        let mut headers = HeaderMap::new();
        let _ = headers.insert(AUTHORIZATION, auth_val);
        let _ = headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        if config.accept_invalid_certs {
            log::warn!(target: LOG_TARGET, "TLS certificate verification is disabled");
        }

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Full URL of a resource path relative to the API root.
    #[must_use]
    pub fn endpoint(&self, resource: &str) -> String {
        format!("{}/{API_PREFIX}/{}", self.base_url, resource.trim_start_matches('/'))
    }

    /// Issue a `GET` for `resource` and return the raw body of a 2xx response.
    pub async fn get(&self, resource: &str, params: &[(&str, &str)]) -> Result<Bytes, ApiError> {
        let url = self.endpoint(resource);
        log::debug!(target: LOG_TARGET, "GET {url} {params:?}");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|source| ApiError::Network { url: url.clone(), source })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|source| ApiError::Network { url, source })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        log::trace!(target: LOG_TARGET, "{status}, {} bytes", body.len());
        Ok(body)
    }
}
