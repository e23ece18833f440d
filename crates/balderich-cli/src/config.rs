/*
[INPUT]:  Optional YAML settings file and CLI overrides
[OUTPUT]: Client configuration and resolved credentials
[POS]:    Configuration layer - CLI startup
[UPDATE]: When adding new settings or credential sources
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use balderich_client::{AuthConfig, ClientConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Client settings read from YAML
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    /// API root, e.g. `https://www.ctfer.vip/v2/api/`
    #[serde(default)]
    pub base_url: Option<String>,
    /// Prefix used when signing paths
    #[serde(default)]
    pub sign_prefix: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// JSON file holding `{"key", "secret"}`
    #[serde(default)]
    pub credentials_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        let settings: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse settings file {}", path.display()))?;
        Ok(settings)
    }

    /// Build the client configuration, `base_url` taking precedence over the file
    pub fn client_config(&self, base_url: Option<&str>) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(url) = base_url.or(self.base_url.as_deref()) {
            config.base_url = url.to_string();
        }
        if let Some(prefix) = &self.sign_prefix {
            config.sign_prefix = prefix.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = self.connect_timeout_secs {
            config.connect_timeout = Duration::from_secs(secs);
        }
        config
    }

    /// Resolve credentials: flag, settings file, default location, then environment
    pub fn credentials(&self, flag: Option<&Path>) -> Result<AuthConfig> {
        let explicit = flag.or(self.credentials_path.as_deref());
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading credentials file");
            return AuthConfig::from_file(path)
                .with_context(|| format!("load credentials from {}", path.display()));
        }

        if let Some(path) = default_credentials_path().filter(|path| path.exists()) {
            debug!(path = %path.display(), "loading default credentials file");
            return AuthConfig::from_file(&path)
                .with_context(|| format!("load credentials from {}", path.display()));
        }

        debug!("loading credentials from environment");
        AuthConfig::from_env().context("no credentials file found and environment not set")
    }
}

/// `~/.config/balderich/key.json` on Linux, platform equivalent elsewhere
pub fn default_credentials_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("balderich").join("key.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("balderich-cli-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&path).unwrap();
        path
    }

    #[test]
    fn test_settings_from_yaml() {
        let dir = temp_dir();
        let path = dir.join("settings.yaml");
        fs::write(
            &path,
            "base_url: http://localhost:9000/v2/api/\ntimeout_secs: 5\ncredentials_path: /tmp/key.json\n",
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(
            settings.base_url.as_deref(),
            Some("http://localhost:9000/v2/api/")
        );
        assert_eq!(settings.timeout_secs, Some(5));
        assert_eq!(
            settings.credentials_path,
            Some(PathBuf::from("/tmp/key.json"))
        );

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_client_config_flag_overrides_file() {
        let settings = Settings {
            base_url: Some("http://from-file/v2/api/".to_string()),
            timeout_secs: Some(3),
            ..Settings::default()
        };

        let config = settings.client_config(Some("http://from-flag/v2/api/"));
        assert_eq!(config.base_url, "http://from-flag/v2/api/");
        assert_eq!(config.timeout, Duration::from_secs(3));

        let config = settings.client_config(None);
        assert_eq!(config.base_url, "http://from-file/v2/api/");
    }

    #[test]
    fn test_credentials_from_flag() {
        let dir = temp_dir();
        let path = dir.join("key.json");
        fs::write(&path, r#"{"key": "cli-key", "secret": "cli-secret"}"#).unwrap();

        let auth = Settings::default().credentials(Some(&path)).unwrap();
        assert_eq!(auth.key(), "cli-key");

        fs::remove_dir_all(dir).unwrap();
    }
}
