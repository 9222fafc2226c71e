//! Error taxonomy for the Scripty client.
//!
//! Every fallible operation in this crate surfaces one of the variants below.
//! Nothing is retried internally: recovery policy (retry, log, fall back)
//! always belongs to the caller.

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by the Scripty client.
///
/// Variants split into three groups:
///
/// - **Credential errors** ([`Error::CredentialNotFound`],
///   [`Error::MissingCredential`], [`Error::AuthenticationFailure`]): no
///   usable API key, or the server rejected it.
/// - **Validation errors** ([`Error::InvalidBlockType`],
///   [`Error::InvalidEntityType`], [`Error::UnknownStructureType`],
///   [`Error::MissingDimension`], [`Error::InvalidDimension`]): bad caller
///   input, raised before any network call is made.
/// - **Transport/server errors** ([`Error::ServerError`],
///   [`Error::RequestTimeout`], [`Error::ConnectionFailure`],
///   [`Error::RequestFailure`]): a single request failed; a structure build
///   that hits one of these stops immediately and leaves already-placed
///   blocks in the world.
#[derive(Debug, Error)]
pub enum Error {
    /// No API key could be resolved from any configured source.
    #[error(
        "API key not found. Please either:\n\
         1. Set SCRIPTY_API_KEY environment variable\n\
         2. Place api-key.txt in the current directory\n\
         3. Place api-key.txt in plugins/Scripty/\n\
         4. Place api-key.txt in ~/.scripty/"
    )]
    CredentialNotFound,

    /// Request headers were computed from a configuration without an API key.
    #[error(
        "API key not found. Please either:\n\
         1. Set SCRIPTY_API_KEY environment variable\n\
         2. Place api-key.txt in the current directory\n\
         3. Place api-key.txt in plugins/Scripty/\n\
         4. Place api-key.txt in ~/.scripty/"
    )]
    MissingCredential,

    /// The server rejected the API key (HTTP 401).
    #[error("invalid or missing API key")]
    AuthenticationFailure,

    /// The block type is not in the allow-list.
    #[error("invalid block type: {0}")]
    InvalidBlockType(String),

    /// The entity type is not in the allow-list.
    #[error("invalid entity type: {0}")]
    InvalidEntityType(String),

    /// The structure type does not name a supported structure.
    #[error("unknown structure type: {0}")]
    UnknownStructureType(String),

    /// A dimension required by the structure type was not provided.
    #[error("structure `{structure}` requires dimension `{dimension}`")]
    MissingDimension {
        /// Name of the structure being built
        structure: &'static str,
        /// Name of the missing dimension
        dimension: &'static str,
    },

    /// A provided dimension was zero.
    #[error("structure `{structure}` dimension `{dimension}` must be at least 1")]
    InvalidDimension {
        /// Name of the structure being built
        structure: &'static str,
        /// Name of the offending dimension
        dimension: &'static str,
    },

    /// The server answered with a non-2xx status, or a 2xx body that was not
    /// valid JSON.
    #[error("server error: {message}")]
    ServerError {
        /// HTTP status code of the response
        status: u16,
        /// The body's `error` field if present, else the raw response text
        message: String,
    },

    /// The configured request timeout elapsed.
    #[error("request timed out after {} seconds", .timeout.as_secs_f64())]
    RequestTimeout {
        /// The configured per-request timeout
        timeout: Duration,
    },

    /// The server could not be reached (DNS, connection refused, reset).
    #[error("failed to connect to server at {url}")]
    ConnectionFailure {
        /// The URL the request was aimed at
        url: String,
    },

    /// Any other transport failure, wrapping the underlying cause.
    #[error("request failed: {0}")]
    RequestFailure(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message() {
        let error = Error::ServerError {
            status: 500,
            message: "disk full".to_string(),
        };
        assert_eq!(error.to_string(), "server error: disk full");
    }

    #[test]
    fn test_timeout_carries_configured_value() {
        let error = Error::RequestTimeout {
            timeout: Duration::from_secs(10),
        };
        assert_eq!(error.to_string(), "request timed out after 10 seconds");
    }

    #[test]
    fn test_connection_failure_carries_url() {
        let error = Error::ConnectionFailure {
            url: "http://localhost:6060/api/block".to_string(),
        };
        assert!(error.to_string().contains("http://localhost:6060/api/block"));
    }

    #[test]
    fn test_credential_not_found_lists_all_sources() {
        let message = Error::CredentialNotFound.to_string();
        assert!(message.contains("SCRIPTY_API_KEY"));
        assert!(message.contains("plugins/Scripty/"));
        assert!(message.contains("~/.scripty/"));
    }
}
