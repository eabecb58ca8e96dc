//! Connection settings for the SSC server
//!
//! Values are resolved once per invocation, highest precedence first:
//!
//! 1. the `--url` / `--token` command-line flags,
//! 2. the `FORTIFY_SSC_URL` / `FORTIFY_SSC_TOKEN` environment variables,
//! 3. the same variables read from `.env`, then `ssc_env.txt`, in the working directory.
//!
//! Whitespace-only values count as missing. The process environment is never modified.

mod error;

pub use error::ConfigError;

use core::fmt::{self, Debug, Formatter};
use std::collections::HashMap;
use std::env;
use std::path::Path;
use url::Url;

const LOG_TARGET: &str = "    config";

pub const URL_VAR: &str = "FORTIFY_SSC_URL";
pub const TOKEN_VAR: &str = "FORTIFY_SSC_TOKEN";

/// Dotenv files consulted in order; a variable found in an earlier file wins.
pub const DOTENV_FILES: [&str; 2] = [".env", "ssc_env.txt"];

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute http(s) URL of the server, without a trailing slash.
    pub base_url: String,
    pub token: String,
    /// Accept self-signed or otherwise unverifiable TLS certificates.
    pub accept_invalid_certs: bool,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

impl Config {
    /// Resolve settings from flags, the process environment, and dotenv files in `dir`.
    pub fn load(dir: &Path, url_override: Option<&str>, token_override: Option<&str>) -> Result<Self, ConfigError> {
        let file_vars = read_dotenv_files(dir);
        Self::resolve(url_override, token_override, |name| {
            env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .or_else(|| file_vars.get(name).cloned())
        })
    }

    /// Resolve settings from explicit overrides, falling back to `lookup` for each variable.
    pub fn resolve(
        url_override: Option<&str>,
        token_override: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let url = pick(url_override, || lookup(URL_VAR)).ok_or(ConfigError::MissingUrl)?;
        let token = pick(token_override, || lookup(TOKEN_VAR)).ok_or(ConfigError::MissingToken)?;

        Ok(Self {
            base_url: validate_base_url(&url)?,
            token,
            accept_invalid_certs: false,
        })
    }
}

/// The trimmed override if it has content, otherwise the trimmed fallback if that has content.
fn pick(value: Option<&str>, fallback: impl FnOnce() -> Option<String>) -> Option<String> {
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };

    value.and_then(non_empty).or_else(|| fallback().as_deref().and_then(non_empty))
}

fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            url: raw.to_string(),
            scheme: parsed.scheme().to_string(),
        });
    }

    Ok(raw.trim_end_matches('/').to_string())
}

fn read_dotenv_files(dir: &Path) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for name in DOTENV_FILES {
        let path = dir.join(name);
        let entries = match dotenvy::from_path_iter(&path) {
            Ok(entries) => entries,
            Err(e) if e.not_found() => continue,
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Could not read '{}': {e}", path.display());
                continue;
            }
        };

        log::debug!(target: LOG_TARGET, "Reading settings from '{}'", path.display());
        for entry in entries {
            match entry {
                Ok((key, value)) => {
                    let _ = vars.entry(key).or_insert(value);
                }
                Err(e) => log::warn!(target: LOG_TARGET, "Ignoring malformed line in '{}': {e}", path.display()),
            }
        }
    }

    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_environment_values() {
        let config = Config::resolve(None, None, vars(&[(URL_VAR, "https://ssc.example.com/"), (TOKEN_VAR, "abc")])).unwrap();
        assert_eq!(config.base_url, "https://ssc.example.com");
        assert_eq!(config.token, "abc");
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_overrides_win() {
        let lookup = vars(&[(URL_VAR, "https://env.example.com"), (TOKEN_VAR, "env-token")]);
        let config = Config::resolve(Some("http://flag.example.com:8080//"), Some(" flag-token "), lookup).unwrap();
        assert_eq!(config.base_url, "http://flag.example.com:8080");
        assert_eq!(config.token, "flag-token");
    }

    #[test]
    fn test_blank_override_falls_back() {
        let lookup = vars(&[(URL_VAR, "https://env.example.com"), (TOKEN_VAR, "env-token")]);
        let config = Config::resolve(Some("  "), Some(""), lookup).unwrap();
        assert_eq!(config.base_url, "https://env.example.com");
        assert_eq!(config.token, "env-token");
    }

    #[test]
    fn test_missing_values() {
        let err = Config::resolve(None, None, vars(&[(TOKEN_VAR, "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingUrl));
        assert_eq!(
            err.to_string(),
            "SSC URL is required. Use --url flag or set FORTIFY_SSC_URL environment variable"
        );

        let err = Config::resolve(Some("https://ssc.example.com"), None, vars(&[(TOKEN_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken));
        assert_eq!(
            err.to_string(),
            "SSC Token is required. Use --token flag or set FORTIFY_SSC_TOKEN environment variable"
        );
    }

    #[test]
    fn test_invalid_urls() {
        let err = Config::resolve(Some("ssc.example.com"), Some("t"), vars(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));

        let err = Config::resolve(Some("ftp://ssc.example.com"), Some("t"), vars(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { ref scheme, .. } if scheme == "ftp"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::resolve(Some("https://ssc.example.com"), Some("top-secret"), vars(&[])).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_dotenv_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env"), "SSC_TEST_ONLY_A=from-env-file\n").unwrap();
        fs::write(
            dir.path().join("ssc_env.txt"),
            "# comment\nSSC_TEST_ONLY_A=from-txt\nSSC_TEST_ONLY_B=\"quoted value\"\n",
        )
        .unwrap();

        let vars = read_dotenv_files(dir.path());
        assert_eq!(vars.get("SSC_TEST_ONLY_A").map(String::as_str), Some("from-env-file"));
        assert_eq!(vars.get("SSC_TEST_ONLY_B").map(String::as_str), Some("quoted value"));
    }

    #[test]
    fn test_missing_dotenv_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_dotenv_files(dir.path()).is_empty());
    }

    #[test]
    fn test_load_from_dotenv_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ssc_env.txt"), format!("{URL_VAR}=https://file.example.com/\n")).unwrap();

        // Flags take precedence over anything the environment or files provide.
        let config = Config::load(dir.path(), Some("https://flag.example.com"), Some("t")).unwrap();
        assert_eq!(config.base_url, "https://flag.example.com");
    }
}
