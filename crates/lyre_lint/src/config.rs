//! Configuration file loading for lyre-lint.
//!
//! Reads `lyre.config.json` from the project directory.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level lint configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LintConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Rule names to enable. When omitted, all registered rules run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,

    /// Top-level names the module exposes; `lyre/no-unused-top-level`
    /// never reports these.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exposed: Vec<String>,

    /// Prefix for intentionally unused binding names (default: `^_`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_pattern: Option<String>,
}

/// Failure to load a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load `lyre.config.json` from the given directory (or CWD if None).
///
/// A missing file is not an error and yields the defaults; an unreadable
/// or malformed file is reported to the caller.
pub fn load_config(dir: Option<&Path>) -> Result<LintConfig, ConfigError> {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config_path = base.join("lyre.config.json");

    if !config_path.exists() {
        return Ok(LintConfig::default());
    }

    let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: config_path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = std::env::temp_dir().join("lyre-lint-no-config-here");
        let _ = std::fs::create_dir_all(&dir);
        let config = load_config(Some(&dir)).unwrap();
        assert!(config.rules.is_none());
        assert!(config.exposed.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "rules": ["lyre/no-unused-bindings"],
            "exposed": ["main"],
            "ignore_pattern": "^_"
        }"#;
        let config: LintConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rules.as_deref(), Some(&["lyre/no-unused-bindings".to_string()][..]));
        assert_eq!(config.exposed, vec!["main"]);
        assert_eq!(config.ignore_pattern.as_deref(), Some("^_"));
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let dir = std::env::temp_dir().join("lyre-lint-bad-config");
        let _ = std::fs::create_dir_all(&dir);
        std::fs::write(dir.join("lyre.config.json"), "{ not json").unwrap();
        assert!(matches!(
            load_config(Some(&dir)),
            Err(ConfigError::Parse { .. })
        ));
    }
}
