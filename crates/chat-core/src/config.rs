use crate::error::{ChatError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "CHAT_SUMMARIZER_CONFIG";

/// Top-level application configuration, loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub keywords: KeywordConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from `$CHAT_SUMMARIZER_CONFIG` or the default path,
    /// falling back to defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::resolve_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ChatError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&contents)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Config path honoring the environment override.
    pub fn resolve_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_path)
    }

    /// Default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chat-summarizer")
            .join("config.toml")
    }
}

/// Keyword ranking settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// How many keywords the report lists.
    pub top_n: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self { top_n: 5 }
    }
}

/// Report rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.keywords.top_n, 5);
        assert_eq!(config.report.format, ReportFormat::Text);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str("[report]\nformat = \"markdown\"\n").unwrap();
        assert_eq!(config.report.format, ReportFormat::Markdown);
        assert_eq!(config.keywords.top_n, 5);
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[keywords]\ntop_n = 3\n\n[report]\nformat = \"json\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.keywords.top_n, 3);
        assert_eq!(config.report.format, ReportFormat::Json);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[report]\nformat = \"html\"\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ChatError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = AppConfig::load_from(&tmp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = AppConfig::default();
        config.keywords.top_n = 8;
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }
}
