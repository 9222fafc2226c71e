//! Client configuration.
//!
//! This module defines the [`Config`] struct holding the server address,
//! protocol, request timeout, default world and the resolved API key. The
//! configuration is assembled once, before the client is constructed, and is
//! treated as immutable afterwards: every handler reads from the same
//! instance and none of them mutates it.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::Error;
use crate::position::DEFAULT_WORLD;

/// Header carrying the API key on every authenticated request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Default server host.
pub const DEFAULT_HOST: &str = "localhost";
/// Default port of the Scripty plugin's REST server.
pub const DEFAULT_PORT: u16 = 6060;
/// Default protocol.
pub const DEFAULT_PROTOCOL: &str = "http";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for a Scripty server.
///
/// The fields are public so callers can assemble a configuration literally
/// (struct update syntax with [`Config::default`] covers the common case),
/// but once the configuration is handed to a client it must not change.
///
/// Requests are only possible with an API key: [`Config::headers`] fails
/// hard when `api_key` is absent instead of silently sending unauthenticated
/// requests.
///
/// # Examples
///
/// ```
/// use scriptymc::Config;
///
/// let config = Config {
///     host: "mc.example.com".to_string(),
///     api_key: Some("secret".to_string()),
///     ..Config::default()
/// };
/// assert_eq!(config.base_url(), "http://mc.example.com:6060");
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    /// Server host name or address
    pub host: String,
    /// Port of the plugin's REST server
    pub port: u16,
    /// Protocol, `http` or `https`
    pub protocol: String,
    /// Resolved API key, if any
    pub api_key: Option<String>,
    /// Per-request network timeout
    pub timeout: Duration,
    /// World used by the convenience methods when no position is given
    pub default_world: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            protocol: DEFAULT_PROTOCOL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            default_world: DEFAULT_WORLD.to_string(),
        }
    }
}

impl Config {
    /// Create a configuration with the default connection settings and no
    /// API key.
    pub fn new() -> Self {
        Config::default()
    }

    /// The server base URL, `protocol://host:port`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }

    /// The headers required on every request.
    ///
    /// Returns the API key header plus JSON content-type and accept headers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] when no API key is configured or
    /// the configured key is empty. Returns [`Error::RequestFailure`] when
    /// the key contains characters that cannot appear in an HTTP header.
    pub fn headers(&self) -> Result<HeaderMap, Error> {
        let api_key = match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(Error::MissingCredential),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(api_key).map_err(|e| Error::RequestFailure(Box::new(e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 6060);
        assert_eq!(config.protocol, "http");
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.default_world, "world");
    }

    #[test]
    fn test_base_url_derivation() {
        let config = Config {
            protocol: "https".to_string(),
            host: "mc.example.com".to_string(),
            port: 8443,
            ..Config::default()
        };
        assert_eq!(config.base_url(), "https://mc.example.com:8443");
    }

    #[test]
    fn test_headers_with_key() {
        let config = Config {
            api_key: Some("secret-key".to_string()),
            ..Config::default()
        };
        let headers = config.headers().unwrap();

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "secret-key");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_headers_without_key_fail() {
        let config = Config::default();
        assert!(matches!(
            config.headers().unwrap_err(),
            Error::MissingCredential
        ));
    }

    #[test]
    fn test_headers_with_empty_key_fail() {
        let config = Config {
            api_key: Some(String::new()),
            ..Config::default()
        };
        assert!(matches!(
            config.headers().unwrap_err(),
            Error::MissingCredential
        ));
    }
}
