//! TOML configuration for the catalog client

use crate::ConfigError;
use serde::Deserialize;
use std::path::Path;

fn default_base_url() -> String {
    "http://localhost:3030".to_string()
}

/// Client configuration for the catalog service
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the catalog service, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let config: ClientConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            error: e,
            path: None,
        })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Validation {
                message: "base_url must not be empty".to_string(),
            });
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::Validation {
                message: "base_url must not end with '/'".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("client.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults_apply_to_empty_config() {
        let config = ClientConfig::parse("").unwrap();
        assert_eq!(config.base_url, "http://localhost:3030");
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), r#"base_url = "https://cards.example""#);

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.base_url, "https://cards.example");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = ClientConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = ClientConfig::parse("base_url = ");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let result = ClientConfig::parse(r#"base_url = """#);
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_trailing_slash_rejected() {
        let result = ClientConfig::parse(r#"base_url = "http://localhost:3030/""#);
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }
}
