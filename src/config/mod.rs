//! Configuration loading and management for DDD Audit
//!
//! Architecture: Anti-Corruption Layer - Configuration translates external YAML into domain settings
//! - Defaults are embedded in the domain, not infrastructure
//! - The built-in skip list can be extended but never reduced

use crate::domain::findings::{AuditError, AuditResult};
use crate::ignore::IGNORE_FILENAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file names searched in the working directory, in order
pub const DEFAULT_CONFIG_FILES: &[&str] = &["ddd_audit.yaml", "ddd_audit.yml", ".ddd_audit.yaml"];

/// Documentation linked from the closing summary
pub const DEFAULT_DOCS_URL: &str = "https://haxtheweb.org/documentation/ddd";

/// Main configuration structure for DDD Audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Configuration format version
    pub version: String,
    /// Name of the per-directory ignore file
    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,
    /// Directory names skipped in addition to the built-in list
    #[serde(default)]
    pub extra_skip_dirs: Vec<String>,
    /// Link printed after every report
    #[serde(default = "default_docs_url")]
    pub docs_url: String,
}

impl AuditConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            AuditError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            AuditError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> AuditResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| AuditError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Explicit path if given, else the first default file present in `dir`, else defaults
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> AuditResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::find_default_file(dir) {
            Some(path) => {
                tracing::debug!("Using configuration from {}", path.display());
                Self::load_from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// First default configuration file that exists in `dir`
    pub fn find_default_file(dir: &Path) -> Option<PathBuf> {
        DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Validate the configuration for consistency and correctness
    pub fn validate(&self) -> AuditResult<()> {
        if !["1.0"].contains(&self.version.as_str()) {
            return Err(AuditError::config(format!(
                "Unsupported configuration version: {}. Supported versions: 1.0",
                self.version
            )));
        }

        if self.ignore_file.trim().is_empty() {
            return Err(AuditError::config("ignore_file must not be empty"));
        }

        if let Some(bad) = self
            .extra_skip_dirs
            .iter()
            .find(|dir| dir.is_empty() || dir.contains(['/', '\\']))
        {
            return Err(AuditError::config(format!(
                "extra_skip_dirs entries must be plain directory names, got '{bad}'"
            )));
        }

        Ok(())
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> AuditResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AuditError::config(format!("Failed to serialize config: {e}")))
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            ignore_file: default_ignore_file(),
            extra_skip_dirs: Vec::new(),
            docs_url: default_docs_url(),
        }
    }
}

fn default_ignore_file() -> String {
    IGNORE_FILENAME.to_string()
}

fn default_docs_url() -> String {
    DEFAULT_DOCS_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AuditConfig::default();
        assert_eq!(config.ignore_file, ".dddignore");
        assert!(config.extra_skip_dirs.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_str_fills_defaults() {
        let yaml = "version: \"1.0\"\nextra_skip_dirs: [coverage]\n";
        let config = AuditConfig::load_from_str(yaml).unwrap();
        assert_eq!(config.ignore_file, ".dddignore");
        assert_eq!(config.extra_skip_dirs, vec!["coverage".to_string()]);
        assert_eq!(config.docs_url, DEFAULT_DOCS_URL);
    }

    #[test]
    fn test_rejects_invalid_configs() {
        for yaml in [
            "version: \"2.0\"\n",
            "version: \"1.0\"\nignore_file: \"\"\n",
            "version: \"1.0\"\nextra_skip_dirs: [a/b]\n",
            "not: [valid",
        ] {
            assert!(AuditConfig::load_from_str(yaml).is_err(), "{yaml}");
        }
    }

    #[test]
    fn test_discover() -> AuditResult<()> {
        let temp_dir = TempDir::new()?;
        let config = AuditConfig::discover(None, temp_dir.path())?;
        assert_eq!(config, AuditConfig::default());

        fs::write(
            temp_dir.path().join(".ddd_audit.yaml"),
            "version: \"1.0\"\nignore_file: .styleignore\n",
        )?;
        let config = AuditConfig::discover(None, temp_dir.path())?;
        assert_eq!(config.ignore_file, ".styleignore");

        let missing = temp_dir.path().join("missing.yaml");
        let result = AuditConfig::discover(Some(&missing), temp_dir.path());
        assert!(result.is_err());

        Ok(())
    }

    #[test]
    fn test_yaml_roundtrip() -> AuditResult<()> {
        let config = AuditConfig {
            extra_skip_dirs: vec!["build".to_string()],
            ..Default::default()
        };
        let yaml = config.to_yaml()?;
        assert_eq!(AuditConfig::load_from_str(&yaml)?, config);
        Ok(())
    }
}
