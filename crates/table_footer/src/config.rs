//! Footer configuration.
//!
//! [`Config`] holds every tunable of the footer. Missing keys fall back to
//! their defaults, so a config file only needs the settings it changes:
//!
//! ```toml
//! per_page = 25
//! sibling_count = 2
//!
//! [style]
//! ellipsis = "..."
//! show_arrows = false
//! ```

use std::fs;
use std::path::Path;

use page_range::{DEFAULT_SIBLING_COUNT, ELLIPSIS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Text markers used when rendering the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Glyph for hidden page runs.
    pub ellipsis: String,
    /// Written before the current page.
    pub current_open: String,
    /// Written after the current page.
    pub current_close: String,
    /// Whether to render previous/next arrows.
    pub show_arrows: bool,
    /// Previous-page arrow.
    pub prev_label: String,
    /// Next-page arrow.
    pub next_label: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            ellipsis: ELLIPSIS.to_string(),
            current_open: "[".to_string(),
            current_close: "]".to_string(),
            show_arrows: true,
            prev_label: "‹".to_string(),
            next_label: "›".to_string(),
        }
    }
}

/// Footer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows per page.
    pub per_page: usize,
    /// Pages shown on each side of the current page.
    pub sibling_count: usize,
    /// Rendering markers.
    pub style: Style,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            sibling_count: DEFAULT_SIBLING_COUNT,
            style: Style::default(),
        }
    }
}

impl Config {
    /// Load a config from TOML text.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing or validation fails.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from JSON text.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing or validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a file (format inferred by extension).
    ///
    /// # Errors
    /// Returns `ConfigError` if reading, parsing, or validation fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.into())),
            None => Err(ConfigError::UnsupportedFormat("unknown".into())),
        }
    }

    /// Serialize this config to TOML.
    ///
    /// # Errors
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::TomlSer)
    }

    /// Check that the settings can drive a footer.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` naming the first bad setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 {
            return Err(ConfigError::Invalid("per_page must be at least 1".into()));
        }
        for (name, value) in [
            ("style.ellipsis", &self.style.ellipsis),
            ("style.prev_label", &self.style.prev_label),
            ("style.next_label", &self.style.next_label),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Invalid(format!("{name} cannot be empty")));
            }
        }
        Ok(())
    }
}

/// Error loading a footer config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.per_page, 10);
        assert_eq!(config.sibling_count, 1);
        assert_eq!(config.style.ellipsis, "…");
        assert!(config.style.show_arrows);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
            sibling_count = 2

            [style]
            ellipsis = "..."
            "#,
        )
        .unwrap();
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
        assert_eq!(config.sibling_count, 2);
        assert_eq!(config.style.ellipsis, "...");
        assert_eq!(config.style.current_open, "[");
    }

    #[test]
    fn test_json() {
        let json = r#"{"per_page": 25, "style": {"show_arrows": false}}"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.per_page, 25);
        assert!(!config.style.show_arrows);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.per_page = 50;
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_zero_per_page() {
        let err = Config::from_toml("per_page = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("per_page"));
    }

    #[test]
    fn test_rejects_empty_ellipsis() {
        let err = Config::from_json(r#"{"style": {"ellipsis": ""}}"#).unwrap_err();
        assert!(err.to_string().contains("style.ellipsis"));
    }

    #[test]
    fn test_rejects_negative_siblings() {
        let err = Config::from_toml("sibling_count = -1").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "per_page = 20").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.per_page, 20);
    }

    #[test]
    fn test_from_file_unsupported() {
        let file = tempfile::Builder::new()
            .suffix(".ini")
            .tempfile()
            .unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "ini"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
