use crate::core::{MonopackError, MonopackResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Personal access token for authenticated requests.
    /// Anonymous access works fine for public repos; a token raises the
    /// rate limit from 60 to 5000 requests per hour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
        }
    }
}

impl Config {
    /// Load config from the platform-specific config directory, then apply
    /// environment overrides (`MONOPACK_API_URL`, `GITHUB_TOKEN`).
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\monopack\config.yaml
    /// - Linux: ~/.config/monopack/config.yaml
    /// - macOS: ~/Library/Application Support/monopack/config.yaml
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load() -> MonopackResult<Self> {
        let mut config = match config_file() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_yaml::from_str(&content)
                    .map_err(|e| MonopackError::Config(format!("Failed to parse config: {}", e)))?
            }
            _ => Self::default(),
        };

        if let Ok(api_url) = std::env::var("MONOPACK_API_URL") {
            config.api_url = api_url.trim_end_matches('/').to_string();
        }
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            if !token.is_empty() {
                config.token = Some(token);
            }
        }

        Ok(config)
    }
}

/// Get the config file path, if a config directory exists for this platform.
fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("monopack").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://api.github.com");
        assert!(config.token.is_none());
    }

    #[test]
    fn test_config_yaml_round_trip() {
        let config = Config {
            api_url: "https://github.example.test".to_string(),
            token: Some("t0ken".to_string()),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.api_url, config.api_url);
        assert_eq!(parsed.token, config.token);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let parsed: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(parsed.api_url, DEFAULT_API_URL);
        assert!(parsed.token.is_none());
    }
}
