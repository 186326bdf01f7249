//! Engine configuration with TOML persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult, DEFAULT_MAX_VERTICES, MAX_LABEL_LEN};

/// Limits and output settings for loading and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on the declared vertex count
    pub max_vertices: usize,

    /// Maximum label length in bytes
    pub max_label_len: usize,

    /// Directory for report files; defaults to the input file's directory
    pub output_dir: Option<PathBuf>,

    /// Treat an unwritable report file as fatal instead of skipping it
    pub strict_reports: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            max_label_len: MAX_LABEL_LEN,
            output_dir: None,
            strict_reports: false,
        }
    }
}

impl EngineConfig {
    /// Load from TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GraphError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse from TOML text.
    pub fn from_toml(content: &str) -> GraphResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| GraphError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml(&self) -> GraphResult<String> {
        toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Reject bounds that would make every input invalid.
    pub fn validate(&self) -> GraphResult<()> {
        if self.max_label_len == 0 {
            return Err(GraphError::Config(
                "max_label_len must be at least 1".to_string(),
            ));
        }
        if self.max_vertices == 0 {
            return Err(GraphError::Config(
                "max_vertices must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
