use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

pub const DEFAULT_REVIEW_ROOT: &str = "lib";
pub const DEFAULT_EXTENSION: &str = "dart";
pub const DEFAULT_MARKER: &str = "// reviewed";
pub const DEFAULT_EXCLUDED_FILE: &str = "ink_flutter_runtime.dart";
pub const DEFAULT_SOURCE_SUITE: &str = "test/Tests.cs";
pub const DEFAULT_TARGET_SUITE: &str = "test/ink_flutter_runtime_test.dart";

/// Settings for both tools, loadable from a YAML file.
///
/// Every field is optional in the file; anything left out keeps the
/// built-in default, which reproduces the layout of the ported project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub review: ReviewConfig,
    pub parity: ParityConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReviewConfig {
    /// Directory walked for source files.
    pub root: PathBuf,
    /// Extension (without the dot) of the files that are checked.
    #[serde(deserialize_with = "deserialize_extension")]
    pub extension: String,
    /// Literal prefix that marks a file as reviewed.
    pub marker: String,
    /// File names that are never checked, wherever they sit in the tree.
    pub excluded_files: Vec<String>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_REVIEW_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            excluded_files: vec![DEFAULT_EXCLUDED_FILE.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParityConfig {
    pub source_suite: PathBuf,
    pub target_suite: PathBuf,
}

impl Default for ParityConfig {
    fn default() -> Self {
        Self {
            source_suite: PathBuf::from(DEFAULT_SOURCE_SUITE),
            target_suite: PathBuf::from(DEFAULT_TARGET_SUITE),
        }
    }
}

/// Command-line values that take precedence over the loaded config.
#[derive(Debug, Clone, Default)]
pub struct ReviewOverrides {
    pub root: Option<PathBuf>,
    pub extension: Option<String>,
    pub marker: Option<String>,
    pub excluded_files: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ParityOverrides {
    pub source_suite: Option<PathBuf>,
    pub target_suite: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
        let config = Self::from_yaml(&content).map_err(|e| ConfigError::parse(path, e))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty file deserializes to a unit value, not a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Strips leading dots; `None` when nothing is left.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let extension = raw.trim().trim_start_matches('.');
    if extension.is_empty() {
        None
    } else {
        Some(extension.to_string())
    }
}

fn deserialize_extension<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    normalize_extension(&raw)
        .ok_or_else(|| serde::de::Error::custom(ConfigError::invalid_extension(raw)))
}

impl ReviewConfig {
    pub fn apply(mut self, overrides: ReviewOverrides) -> Result<Self> {
        if let Some(root) = overrides.root {
            self.root = root;
        }
        if let Some(extension) = overrides.extension {
            self.extension = normalize_extension(&extension)
                .ok_or_else(|| ConfigError::invalid_extension(extension))?;
        }
        if let Some(marker) = overrides.marker {
            self.marker = marker;
        }
        if !overrides.excluded_files.is_empty() {
            self.excluded_files = overrides.excluded_files;
        }
        Ok(self)
    }
}

impl ParityConfig {
    pub fn apply(mut self, overrides: ParityOverrides) -> Self {
        if let Some(source_suite) = overrides.source_suite {
            self.source_suite = source_suite;
        }
        if let Some(target_suite) = overrides.target_suite {
            self.target_suite = target_suite;
        }
        self
    }
}
