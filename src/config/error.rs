/// Why connection settings could not be resolved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SSC URL is required. Use --url flag or set {} environment variable", super::URL_VAR)]
    MissingUrl,

    #[error("SSC Token is required. Use --token flag or set {} environment variable", super::TOKEN_VAR)]
    MissingToken,

    #[error("SSC URL '{url}' is not a valid URL")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("SSC URL '{url}' must use http or https, not '{scheme}'")]
    UnsupportedScheme { url: String, scheme: String },
}
