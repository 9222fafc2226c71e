//! Request layer for the Scripty server API.
//!
//! This module provides the [`Requester`] trait and its [`HttpRequester`]
//! implementation performing a single HTTP call against the configured
//! server: it builds the URL, attaches the auth headers, applies the
//! configured timeout and classifies every failure into one of the
//! [`Error`] variants. It never retries: a single failure is surfaced
//! immediately to the caller.

use log::{debug, info};
use mockall::automock;
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::config::Config;
use crate::error::Error;

/// Trait for issuing one request against the Scripty server.
///
/// This trait abstracts the HTTP operation so the block, entity and
/// structure handlers can be tested with mocks.
#[automock]
pub trait Requester {
    /// Issue a single HTTP call against `{base_url}/api/{endpoint}`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Path below `/api/`, e.g. `block`
    /// * `method` - HTTP method
    /// * `body` - Optional JSON body
    /// * `extra_headers` - Optional caller headers, merged with the
    ///   configuration's required headers
    ///
    /// Returns the decoded JSON response body.
    fn request(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<Value, Error>;
}

/// Blocking HTTP implementation of [`Requester`].
///
/// Cloning is cheap: the underlying blocking client is shared, so one
/// requester is built per client session and handed to every handler.
///
/// # Examples
///
/// ```no_run
/// use reqwest::Method;
/// use scriptymc::Config;
/// use scriptymc::api::{HttpRequester, Requester};
///
/// # fn main() -> Result<(), scriptymc::Error> {
/// let config = Config {
///     api_key: Some("secret".to_string()),
///     ..Config::default()
/// };
/// let requester = HttpRequester::new(config)?;
/// let response = requester.request("ping", Method::GET, None, None)?;
/// println!("{response}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpRequester {
    /// Shared read-only client configuration
    config: Config,
    /// Blocking HTTP client, carries the configured timeout
    client: Client,
}

impl HttpRequester {
    /// Create a requester for the given configuration.
    ///
    /// The per-request timeout is fixed on the HTTP client here, once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailure`] if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::RequestFailure(Box::new(e)))?;
        Ok(HttpRequester { config, client })
    }

    /// The configuration this requester was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Map a transport error onto the error taxonomy.
    fn classify(&self, error: reqwest::Error, url: &str) -> Error {
        if error.is_timeout() {
            Error::RequestTimeout {
                timeout: self.config.timeout,
            }
        } else if error.is_connect() {
            Error::ConnectionFailure {
                url: url.to_string(),
            }
        } else {
            Error::RequestFailure(Box::new(error))
        }
    }
}

impl Requester for HttpRequester {
    /// Perform the call and classify the outcome.
    ///
    /// Outcomes, in priority order:
    ///
    /// 1. HTTP 401 - [`Error::AuthenticationFailure`], regardless of body
    /// 2. Any other non-2xx status - [`Error::ServerError`] carrying the
    ///    body's `error` field if the body is JSON with one, else the raw
    ///    response text
    /// 3. Timeout elapsed - [`Error::RequestTimeout`]
    /// 4. Connection failure - [`Error::ConnectionFailure`] with the URL
    /// 5. Any other transport error - [`Error::RequestFailure`]
    ///
    /// A 2xx response whose body is not valid JSON is itself a
    /// [`Error::ServerError`] (malformed response).
    ///
    /// Header merge policy: the configuration's required headers win over
    /// caller-supplied headers on conflicting keys.
    fn request(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<Value, Error> {
        let url = format!("{}/api/{}", self.config.base_url(), endpoint);

        // Caller headers first, then the required ones: HeaderMap::extend
        // replaces duplicates, so the configuration wins on conflicts.
        let mut headers = extra_headers.unwrap_or_default();
        headers.extend(self.config.headers()?);

        info!("request {} {}", method, url);
        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = &body {
            debug!("request body for {} -> {}", url, body);
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|e| self.classify(e, &url))?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::AuthenticationFailure);
        }

        let text = response.text().map_err(|e| self.classify(e, &url))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or(text);
            return Err(Error::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let decoded: Value = serde_json::from_str(&text).map_err(|_| Error::ServerError {
            status: status.as_u16(),
            message: format!("malformed response body: {text}"),
        })?;

        debug!("response from {} -> {:?}", url, decoded);
        Ok(decoded)
    }
}
