//! Server connection configuration
//!
//! Resolution order for each value: command-line flag, analysis settings,
//! environment, built-in default.

use crate::error::{Error, Result};
use crate::settings::Settings;
use std::env;
use url::Url;

/// Server used when nothing else is configured
pub const DEFAULT_HOST_URL: &str = "http://localhost:9000";

/// Settings key for the server URL
pub const HOST_URL_PROPERTY: &str = "sonar.host.url";
/// Settings key for the authentication token
pub const TOKEN_PROPERTY: &str = "sonar.token";
/// Deprecated settings key for the authentication token
pub const LOGIN_PROPERTY: &str = "sonar.login";

/// Environment variable for the server URL
pub const HOST_URL_ENV: &str = "SONAR_HOST_URL";
/// Environment variable for the authentication token
pub const TOKEN_ENV: &str = "SONAR_TOKEN";

/// Source of the authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Token given on the command line
    Flag,
    /// Token from the analysis settings
    Settings,
    /// Token from environment variable
    EnvVar,
}

/// Where and how to reach the analysis server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server base URL, possibly with a context path
    pub host_url: Url,
    /// Authentication token
    pub token: Option<String>,
    /// Where the token was obtained from
    pub token_source: Option<TokenSource>,
}

impl ServerConfig {
    /// Resolve from flags, settings and the process environment
    pub fn resolve(
        host_flag: Option<&str>,
        token_flag: Option<&str>,
        settings: &Settings,
    ) -> Result<Self> {
        Self::resolve_with(host_flag, token_flag, settings, |key| env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup
    pub fn resolve_with(
        host_flag: Option<&str>,
        token_flag: Option<&str>,
        settings: &Settings,
        env_lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let host = host_flag
            .map(ToString::to_string)
            .or_else(|| settings.get_trimmed(HOST_URL_PROPERTY).map(ToString::to_string))
            .or_else(|| env_lookup(HOST_URL_ENV).filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_HOST_URL.to_string());

        let host_url = Url::parse(host.trim())
            .map_err(|e| Error::Config(format!("invalid server URL {host:?}: {e}")))?;
        if !matches!(host_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "server URL must use http or https: {host_url}"
            )));
        }

        let (token, token_source) = if let Some(token) = token_flag {
            (Some(token.to_string()), Some(TokenSource::Flag))
        } else if let Some(token) = settings
            .get_trimmed(TOKEN_PROPERTY)
            .or_else(|| settings.get_trimmed(LOGIN_PROPERTY))
        {
            (Some(token.to_string()), Some(TokenSource::Settings))
        } else if let Some(token) = env_lookup(TOKEN_ENV).filter(|v| !v.trim().is_empty()) {
            (Some(token), Some(TokenSource::EnvVar))
        } else {
            (None, None)
        };

        Ok(Self {
            host_url,
            token,
            token_source,
        })
    }
}
