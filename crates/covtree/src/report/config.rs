//! Report configuration

use crate::result::CovResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where and how a report is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output directory for pages and assets
    pub target: PathBuf,
    /// Title shown on every page
    pub title: String,
    /// Charset declared in every page
    pub charset: String,
    /// Directory with template overrides
    pub template_dir: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from("target/coverage"),
            title: "Code Coverage Report".to_string(),
            charset: "UTF-8".to_string(),
            template_dir: None,
        }
    }
}

impl ReportConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a YAML file; missing keys keep their defaults
    pub fn from_yaml_file(path: &Path) -> CovResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> CovResult<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = target.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    #[must_use]
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.target, PathBuf::from("target/coverage"));
        assert_eq!(config.charset, "UTF-8");
        assert!(config.template_dir.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ReportConfig::new()
            .with_target("out")
            .with_title("Nightly")
            .with_charset("ISO-8859-1")
            .with_template_dir("tpl");

        assert_eq!(config.target, PathBuf::from("out"));
        assert_eq!(config.title, "Nightly");
        assert_eq!(config.charset, "ISO-8859-1");
        assert_eq!(config.template_dir, Some(PathBuf::from("tpl")));
    }

    #[test]
    fn test_yaml_partial() {
        let config = ReportConfig::from_yaml("title: Nightly\ntarget: build/cov\n").unwrap();
        assert_eq!(config.title, "Nightly");
        assert_eq!(config.target, PathBuf::from("build/cov"));
        assert_eq!(config.charset, "UTF-8");
    }

    #[test]
    fn test_yaml_invalid() {
        let err = ReportConfig::from_yaml("title: [unclosed").unwrap_err();
        assert!(err.to_string().contains("YAML"));
    }

    #[test]
    fn test_yaml_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("covtree.yaml");
        std::fs::write(&path, "charset: ISO-8859-1\n").unwrap();

        let config = ReportConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.charset, "ISO-8859-1");
    }
}
