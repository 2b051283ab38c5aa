//! Engine configuration
//!
//! Loaded from `.yara-assist.yaml` (or `.yml` / JSON) in a workspace, with every
//! key optional. The defaults reproduce the stock editor behaviour.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names searched by [`EngineConfig::find`], in order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".yara-assist.yaml",
    ".yara-assist.yml",
    "yara-assist.yaml",
    "yara-assist.yml",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse YAML config: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON config: {0}")]
    ParseJson(#[from] serde_json::Error),
}

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Completion settings
    pub completion: CompletionSettings,
    /// Lint settings
    pub lint: LintSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            completion: CompletionSettings::default(),
            lint: LintSettings::default(),
        }
    }
}

/// Completion settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CompletionSettings {
    /// Append items for variables referenced in the document
    pub include_variables: bool,
    /// Truncate the result list (0 = unlimited)
    pub max_completions: usize,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            include_variables: true,
            max_completions: 0,
        }
    }
}

/// What counts as a variable definition for the undefined-variable check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariableDefinitions {
    /// `$name =` string definitions only
    #[default]
    Declared,
    /// Any `$name` occurrence anywhere in the document
    AnyOccurrence,
}

/// Lint settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LintSettings {
    /// Check codes to skip
    pub disabled: Vec<String>,
    /// Definition semantics for `undefined-variable`
    pub variable_definitions: VariableDefinitions,
    /// Honour backslash escapes in strings and quote counting
    pub escape_aware_strings: bool,
}

impl LintSettings {
    pub fn is_enabled(&self, code: &str) -> bool {
        !self.disabled.iter().any(|d| d == code)
    }
}

impl EngineConfig {
    /// Load configuration from a YAML or JSON file (chosen by extension)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        if path.extension().is_some_and(|e| e == "json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }

    /// First config file present in `dir`
    pub fn find(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Load configuration from default locations, falling back to defaults
    pub fn load_default(workspace_root: &Path) -> Self {
        let Some(path) = Self::find(workspace_root) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring config: {}", e);
                Self::default()
            }
        }
    }
}
