//! Page shell configuration.
//!
//! The calculator itself takes no parameters; these values only feed the
//! hosting surfaces - the document title, description, and language of the
//! exported page, and the path prefix the static files are served under.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable that overrides the exported base path, mirroring
/// the way the deployment environment used to select the path prefix.
pub const BASE_PATH_ENV: &str = "CALCULADORA_BASE_PATH";

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML for a [`SiteConfig`].
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Static page metadata and deployment settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document title.
    pub title: String,
    /// Document meta description.
    pub description: String,
    /// Document language tag.
    pub lang: String,
    /// Path prefix the static export is deployed under, e.g. `/calculadora`.
    /// Empty for the site root.
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Calculadora".to_string(),
            description: "Una calculadora básica".to_string(),
            lang: "es".to_string(),
            base_path: String::new(),
        }
    }
}

impl SiteConfig {
    /// Loads a configuration from a TOML file. Missing fields fall back to
    /// the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Applies the `CALCULADORA_BASE_PATH` environment override, if set.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_path) = std::env::var(BASE_PATH_ENV) {
            self.base_path = base_path;
        }
        self
    }

    /// The base path normalised for URL concatenation: no trailing slash,
    /// and a leading slash unless empty.
    #[must_use]
    pub fn url_prefix(&self) -> String {
        let trimmed = self.base_path.trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Calculadora");
        assert_eq!(config.lang, "es");
        assert!(config.base_path.is_empty());
    }

    #[test]
    fn test_load_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "title = \"Mi Calculadora\"\n\
             description = \"desc\"\n\
             lang = \"en\"\n\
             base_path = \"/calc\"\n"
        )
        .unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "Mi Calculadora");
        assert_eq!(config.description, "desc");
        assert_eq!(config.lang, "en");
        assert_eq!(config.base_path, "/calc");
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_path = \"/calculadora\"").unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.base_path, "/calculadora");
        assert_eq!(config.title, "Calculadora");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = SiteConfig::load(Path::new("/nonexistent/calculadora.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_unknown_field_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "titel = \"typo\"").unwrap();

        let result = SiteConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_url_prefix_normalisation() {
        let mut config = SiteConfig::default();
        assert_eq!(config.url_prefix(), "");

        config.base_path = "/calculadora".to_string();
        assert_eq!(config.url_prefix(), "/calculadora");

        config.base_path = "calculadora/".to_string();
        assert_eq!(config.url_prefix(), "/calculadora");
    }
}
