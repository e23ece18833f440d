/*
[INPUT]:  Key/secret pair, JSON credential file or stream, environment variables
[OUTPUT]: Immutable AuthConfig used by the signer and HTTP client
[POS]:    Auth layer - credential loading
[UPDATE]: When credential file format or loading sources change
*/

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::http::{BalderichError, Result};

/// Environment variable holding the API key
pub const KEY_ENV_VAR: &str = "BALDERICH_KEY";
/// Environment variable holding the API secret
pub const SECRET_ENV_VAR: &str = "BALDERICH_SECRET";

/// Key/secret pair issued by the platform
///
/// Loaded once and never mutated. The secret is kept out of `Debug` output.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AuthConfig {
    key: String,
    secret: String,
}

impl AuthConfig {
    /// Create credentials from an explicit key and secret
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Load credentials from a JSON file of the form `{"key": "...", "secret": "..."}`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            BalderichError::Config(format!(
                "Failed to open credential file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load credentials from an already-open JSON byte stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()
    }

    /// Load credentials from `BALDERICH_KEY` and `BALDERICH_SECRET`
    pub fn from_env() -> Result<Self> {
        let key = read_env(KEY_ENV_VAR)?;
        let secret = read_env(SECRET_ENV_VAR)?;
        Self::new(key, secret).validate()
    }

    /// The public key identifier sent with every request
    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }

    fn validate(self) -> Result<Self> {
        if self.key.trim().is_empty() {
            return Err(BalderichError::Config("credential key is empty".to_string()));
        }
        if self.secret.is_empty() {
            return Err(BalderichError::Config(
                "credential secret is empty".to_string(),
            ));
        }
        Ok(self)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

fn read_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|e| BalderichError::Config(format!("Failed to read {name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_reader() {
        let json = br#"{"key": "abc", "secret": "xyz"}"#;
        let config = AuthConfig::from_reader(Cursor::new(&json[..])).unwrap();
        assert_eq!(config, AuthConfig::new("abc", "xyz"));
        assert_eq!(config.key(), "abc");
        assert_eq!(config.secret(), "xyz");
    }

    #[test]
    fn test_from_reader_ignores_extra_fields() {
        let json = br#"{"key": "abc", "secret": "xyz", "comment": "team laptop"}"#;
        let config = AuthConfig::from_reader(Cursor::new(&json[..])).unwrap();
        assert_eq!(config.key(), "abc");
    }

    #[test]
    fn test_from_reader_missing_secret() {
        let json = br#"{"key": "abc"}"#;
        let err = AuthConfig::from_reader(Cursor::new(&json[..])).unwrap_err();
        assert!(matches!(err, BalderichError::Serialization(_)));
    }

    #[test]
    fn test_from_reader_empty_key() {
        let json = br#"{"key": "  ", "secret": "xyz"}"#;
        let err = AuthConfig::from_reader(Cursor::new(&json[..])).unwrap_err();
        match err {
            BalderichError::Config(msg) => assert!(msg.contains("key")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let err = AuthConfig::from_file("/nonexistent/balderich/key.json").unwrap_err();
        match err {
            BalderichError::Config(msg) => assert!(msg.contains("/nonexistent/balderich/key.json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_env() {
        // SAFETY: this is the only test in the workspace that reads or writes
        // BALDERICH_KEY / BALDERICH_SECRET, and all steps run sequentially here.
        unsafe {
            std::env::set_var(KEY_ENV_VAR, "env-key");
            std::env::set_var(SECRET_ENV_VAR, "env-secret");
        }
        let config = AuthConfig::from_env().unwrap();
        assert_eq!(config, AuthConfig::new("env-key", "env-secret"));

        unsafe {
            std::env::set_var(KEY_ENV_VAR, "");
        }
        match AuthConfig::from_env().unwrap_err() {
            BalderichError::Config(msg) => assert!(msg.contains("key is empty")),
            other => panic!("unexpected error: {other:?}"),
        }

        unsafe {
            std::env::remove_var(KEY_ENV_VAR);
            std::env::remove_var(SECRET_ENV_VAR);
        }
        match AuthConfig::from_env().unwrap_err() {
            BalderichError::Config(msg) => assert!(msg.contains(KEY_ENV_VAR)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::new("visible-key", "hidden-secret");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("visible-key"));
        assert!(!rendered.contains("hidden-secret"));
    }
}
