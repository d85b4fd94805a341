//! Configuration types for design-guard.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::system::DEFAULT_SPACING_UNIT;
use crate::Severity;

/// UI markup and stylesheet extensions checked by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".tsx", ".jsx", ".vue", ".svelte", ".css", ".scss"];

/// Default location of the design system document, relative to the project root.
pub const DEFAULT_DESIGN_SYSTEM: &str = ".design/system.md";

/// Top-level configuration for design-guard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Guard-level settings.
    #[serde(default)]
    pub guard: GuardSection,

    /// Per-rule configurations, keyed by rule name or code.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

/// Guard-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardSection {
    /// Design system document, relative to the project root.
    #[serde(default = "default_design_system")]
    pub design_system: PathBuf,

    /// File extensions (with leading dot) that are checked.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Override for the spacing grid in pixels.
    #[serde(default)]
    pub spacing_unit: Option<u32>,
}

impl Default for GuardSection {
    fn default() -> Self {
        Self {
            design_system: default_design_system(),
            extensions: default_extensions(),
            spacing_unit: None,
        }
    }
}

fn default_design_system() -> PathBuf {
    PathBuf::from(DEFAULT_DESIGN_SYSTEM)
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect()
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether the rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Errors when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML.
    #[error("invalid config: {message}")]
    Parse {
        /// Parse error detail.
        message: String,
    },
    /// Config is structurally invalid.
    #[error("config validation: {0}")]
    Validation(String),
}

impl GuardConfig {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Validate config consistency.
    ///
    /// # Errors
    ///
    /// Returns error describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.guard.spacing_unit == Some(0) {
            return Err(ConfigError::Validation(
                "guard.spacing_unit must be at least 1".to_string(),
            ));
        }
        if let Some(ext) = self.guard.extensions.iter().find(|e| !e.starts_with('.')) {
            return Err(ConfigError::Validation(format!(
                "guard.extensions: '{ext}' must start with '.'"
            )));
        }
        Ok(())
    }

    /// Returns the spacing grid, falling back to the default.
    #[must_use]
    pub fn spacing_unit(&self) -> u32 {
        self.guard.spacing_unit.unwrap_or(DEFAULT_SPACING_UNIT)
    }

    /// Returns the design system document path under `root`.
    #[must_use]
    pub fn design_system_path(&self, root: &Path) -> PathBuf {
        root.join(&self.guard.design_system)
    }

    /// Returns true if files with this extension (leading dot) are checked.
    #[must_use]
    pub fn is_checked_extension(&self, ext: &str) -> bool {
        self.guard.extensions.iter().any(|e| e == ext)
    }

    fn rule_config(&self, name: &str, code: &str) -> Option<&RuleConfig> {
        self.rules.get(name).or_else(|| self.rules.get(code))
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, name: &str, code: &str) -> bool {
        self.rule_config(name, code)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, name: &str, code: &str) -> Option<Severity> {
        self.rule_config(name, code).and_then(|c| c.severity)
    }
}
