//! API key resolution.
//!
//! The Scripty plugin writes its API key to `plugins/Scripty/api-key.txt` at
//! server start up, and players commonly copy it next to their scripts or
//! into `~/.scripty/`. This module resolves a key from an explicit, ordered
//! list of [`CredentialSource`] strategies so the lookup order stays visible
//! and tests can substitute fake sources without touching the filesystem or
//! the environment.
//!
//! The standard chain, first success wins:
//!
//! 1. An explicit key handed to [`CredentialResolver::standard`]
//! 2. The `SCRIPTY_API_KEY` environment variable
//! 3. `./api-key.txt`
//! 4. `./plugins/Scripty/api-key.txt`
//! 5. `~/.scripty/api-key.txt`
//!
//! Key files may contain either the bare key or an `API Key: <key>` line;
//! unreadable or empty candidates are skipped silently.

use std::env;
use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::error::Error;

/// Environment variable consulted by the standard resolution chain.
pub const API_KEY_ENV_VAR: &str = "SCRIPTY_API_KEY";

/// One strategy for producing an API key.
///
/// A source either yields a non-empty key or declines by returning `None`;
/// it never fails loudly. Failure is decided by the [`CredentialResolver`]
/// once every source has declined.
pub trait CredentialSource {
    /// Human-readable description of the source, for logging.
    fn describe(&self) -> String;

    /// Attempt to produce a non-empty API key.
    fn resolve(&self) -> Option<String>;
}

/// A key supplied directly by the caller.
pub struct ExplicitKey {
    key: String,
}

impl ExplicitKey {
    /// Create a source wrapping an explicitly provided key.
    pub fn new(key: impl Into<String>) -> Self {
        ExplicitKey { key: key.into() }
    }
}

impl CredentialSource for ExplicitKey {
    fn describe(&self) -> String {
        "explicit value".to_string()
    }

    fn resolve(&self) -> Option<String> {
        let key = self.key.trim();
        if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        }
    }
}

/// A key read from an environment variable.
pub struct EnvKey {
    var: String,
}

impl EnvKey {
    /// Create a source reading the given environment variable.
    pub fn new(var: impl Into<String>) -> Self {
        EnvKey { var: var.into() }
    }
}

impl CredentialSource for EnvKey {
    fn describe(&self) -> String {
        format!("environment variable {}", self.var)
    }

    fn resolve(&self) -> Option<String> {
        let value = env::var(&self.var).ok()?;
        let key = value.trim();
        if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        }
    }
}

/// A key read from a file.
///
/// The file may contain the bare key, or a single `<label>: <key>` line as
/// written by the server plugin; with a colon present, everything after the
/// first colon is taken, trimmed.
pub struct KeyFile {
    path: PathBuf,
}

impl KeyFile {
    /// Create a source reading the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        KeyFile { path: path.into() }
    }
}

impl CredentialSource for KeyFile {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn resolve(&self) -> Option<String> {
        // Missing or unreadable files are skipped silently
        let content = fs::read_to_string(&self.path).ok()?;
        let key = match content.split_once(':') {
            Some((_, key)) => key.trim(),
            None => content.trim(),
        };
        if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        }
    }
}

/// Resolves an API key by walking an ordered list of sources.
///
/// Resolution runs at most once per client construction, never per request.
///
/// # Examples
///
/// ```
/// use scriptymc::credentials::{CredentialResolver, ExplicitKey};
///
/// let resolver = CredentialResolver::new(vec![Box::new(ExplicitKey::new("secret"))]);
/// assert_eq!(resolver.resolve().unwrap(), "secret");
/// ```
pub struct CredentialResolver {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialResolver {
    /// Create a resolver from an explicit, ordered list of sources.
    pub fn new(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        CredentialResolver { sources }
    }

    /// Create the standard resolution chain.
    ///
    /// The chain tries, in order: the explicit key (if any), the
    /// [`API_KEY_ENV_VAR`] environment variable, `./api-key.txt`,
    /// `./plugins/Scripty/api-key.txt` and `~/.scripty/api-key.txt`.
    pub fn standard(explicit: Option<&str>) -> Self {
        let mut sources: Vec<Box<dyn CredentialSource>> = Vec::new();
        if let Some(key) = explicit {
            sources.push(Box::new(ExplicitKey::new(key)));
        }
        sources.push(Box::new(EnvKey::new(API_KEY_ENV_VAR)));
        sources.push(Box::new(KeyFile::new("api-key.txt")));
        sources.push(Box::new(KeyFile::new("plugins/Scripty/api-key.txt")));
        if let Some(home) = dirs::home_dir() {
            sources.push(Box::new(KeyFile::new(home.join(".scripty/api-key.txt"))));
        }
        CredentialResolver::new(sources)
    }

    /// Walk the sources in order and return the first key found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CredentialNotFound`] when every source declines.
    pub fn resolve(&self) -> Result<String, Error> {
        for source in &self.sources {
            if let Some(key) = source.resolve() {
                debug!("API key resolved from {}", source.describe());
                return Ok(key);
            }
        }
        Err(Error::CredentialNotFound)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;
    use tempfile::NamedTempFile;

    use super::*;

    /// A source that always yields the same key, or always declines.
    struct StaticSource(Option<&'static str>);

    impl CredentialSource for StaticSource {
        fn describe(&self) -> String {
            "static test source".to_string()
        }

        fn resolve(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn test_first_source_wins() {
        let resolver = CredentialResolver::new(vec![
            Box::new(StaticSource(Some("first"))),
            Box::new(StaticSource(Some("second"))),
        ]);
        assert_eq!(resolver.resolve().unwrap(), "first");
    }

    #[test]
    fn test_declining_sources_are_skipped() {
        let resolver = CredentialResolver::new(vec![
            Box::new(StaticSource(None)),
            Box::new(StaticSource(None)),
            Box::new(StaticSource(Some("third"))),
        ]);
        assert_eq!(resolver.resolve().unwrap(), "third");
    }

    #[test]
    fn test_exhausted_sources_fail() {
        let resolver = CredentialResolver::new(vec![Box::new(StaticSource(None))]);
        let error = resolver.resolve().unwrap_err();
        assert!(matches!(error, Error::CredentialNotFound));
    }

    #[test]
    fn test_empty_explicit_key_declines() {
        assert_eq!(ExplicitKey::new("").resolve(), None);
        assert_eq!(ExplicitKey::new("   ").resolve(), None);
        assert_eq!(ExplicitKey::new("abc").resolve(), Some("abc".to_string()));
    }

    #[test]
    fn test_key_file_bare_key() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "my-secret-key").unwrap();

        let source = KeyFile::new(file.path());
        assert_eq!(source.resolve(), Some("my-secret-key".to_string()));
    }

    #[test]
    fn test_key_file_labelled_key() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "API Key: my-secret-key").unwrap();

        let source = KeyFile::new(file.path());
        assert_eq!(source.resolve(), Some("my-secret-key".to_string()));
    }

    #[test]
    fn test_key_file_missing_is_skipped() {
        let source = KeyFile::new("/nonexistent/path/api-key.txt");
        assert_eq!(source.resolve(), None);
    }

    #[test]
    fn test_key_file_empty_is_skipped() {
        let file = NamedTempFile::new().unwrap();
        let source = KeyFile::new(file.path());
        assert_eq!(source.resolve(), None);
    }

    #[test]
    #[serial]
    fn test_env_key() {
        unsafe { env::set_var("SCRIPTYMC_TEST_KEY", "from-env") };
        let source = EnvKey::new("SCRIPTYMC_TEST_KEY");
        assert_eq!(source.resolve(), Some("from-env".to_string()));

        unsafe { env::remove_var("SCRIPTYMC_TEST_KEY") };
        assert_eq!(source.resolve(), None);
    }

    #[test]
    #[serial]
    fn test_standard_chain_prefers_explicit_key() {
        unsafe { env::set_var(API_KEY_ENV_VAR, "from-env") };
        let resolver = CredentialResolver::standard(Some("explicit"));
        assert_eq!(resolver.resolve().unwrap(), "explicit");
        unsafe { env::remove_var(API_KEY_ENV_VAR) };
    }
}
