//! Configuration loading and validation.
//!
//! Projects configure the analysis through a small YAML file:
//!
//! ```yaml
//! analysis:
//!   ignore:
//!     attributes: [language]
//!     linters: []
//! ```
//!
//! Configuration problems are caller errors and surface at load time,
//! before any checker executes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::registry::builtin_names;
use crate::error::{CharmscanError, Result};

/// Root configuration structure for charmscan.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Analysis settings
    pub analysis: AnalysisConfig,
}

/// Settings for the analysis engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Checkers to skip, by category bucket
    pub ignore: IgnoreConfig,
}

/// Checker names to skip, split by category bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Attribute checkers to skip
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,

    /// Warning/error checkers to skip
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linters: Vec<String>,
}

impl ProjectConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CharmscanError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = fs::read_to_string(path).map_err(|e| CharmscanError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: ProjectConfig =
            serde_yaml::from_str(&raw).map_err(|e| CharmscanError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject ignore entries that name no registered checker.
    pub fn validate(&self) -> Result<()> {
        let known = builtin_names();
        let ignored = self
            .analysis
            .ignore
            .attributes
            .iter()
            .chain(&self.analysis.ignore.linters);

        for name in ignored {
            if !known.contains(&name.as_str()) {
                return Err(CharmscanError::ConfigValidationError {
                    message: format!("unknown checker name in ignore list: '{name}'"),
                });
            }
        }
        Ok(())
    }
}

impl IgnoreConfig {
    /// Whether an attribute checker is ignored.
    pub fn ignores_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|n| n == name)
    }

    /// Whether a warning/error checker is ignored.
    pub fn ignores_linter(&self, name: &str) -> bool {
        self.linters.iter().any(|n| n == name)
    }
}
