//! Registry configuration file support.
//!
//! A registry can be tailored with a TOML file:
//!
//! ```toml
//! [registry]
//! base = "custom-presets.json"     # replaces the embedded base resource
//! categories = ["length", "time"]  # subset of built-in categories
//!
//! [aliases]
//! distance = "length"
//! ```
//!
//! Omitted sections fall back to the defaults used by [`crate::build_registry`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use linear_presets_core::{PresetError, PresetResult};

use crate::categories::{builtin_names, builtin_table, DEFAULT_ALIASES};
use crate::registry::{build_registry_with, Registry};

/// Registry configuration from file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Where tables come from.
    #[serde(default)]
    pub registry: RegistrySettings,
    /// `alias = "target"` pairs; defaults to `distance` and `speed`.
    #[serde(default = "default_aliases")]
    pub aliases: BTreeMap<String, String>,
}

/// Source settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Base JSON resource to load instead of the embedded one.
    #[serde(default)]
    pub base: Option<PathBuf>,
    /// Built-in categories to include; all of them when absent.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

fn default_aliases() -> BTreeMap<String, String> {
    DEFAULT_ALIASES
        .iter()
        .map(|(alias, target)| (alias.to_string(), target.to_string()))
        .collect()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            registry: RegistrySettings::default(),
            aliases: default_aliases(),
        }
    }
}

impl RegistryConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> PresetResult<Self> {
        let config: RegistryConfig = toml::from_str(content).map_err(|e| {
            PresetError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// A relative `registry.base` path is resolved against the file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> PresetResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PresetError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let mut config = Self::from_toml_str(&content)?;
        if let (Some(base), Some(dir)) = (config.registry.base.as_mut(), path.parent()) {
            if base.is_relative() {
                *base = dir.join(&*base);
            }
        }
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `presets.toml` in:
    /// 1. Current directory
    /// 2. `linear-presets/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> PresetResult<Self> {
        let search_paths = [
            PathBuf::from("presets.toml"),
            PathBuf::from("linear-presets/presets.toml"),
            PathBuf::from("../presets.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(PresetError::ConfigurationError(
            "No presets.toml found in standard locations".to_string(),
        ))
    }

    /// Checks category names against the built-in tables and rejects aliases named like a
    /// built-in category.
    ///
    /// Alias targets are not checked here: a target may come from the base resource or another
    /// alias, and an unresolved alias is skipped when the registry is built.
    pub fn validate(&self) -> PresetResult<()> {
        if let Some(names) = &self.registry.categories {
            for name in names {
                if builtin_table(name).is_none() {
                    return Err(PresetError::ConfigurationError(format!(
                        "Unknown category: {}",
                        name
                    )));
                }
            }
            if names.is_empty() {
                warn!("Configuration selects no built-in categories");
            }
        }
        for alias in self.aliases.keys() {
            if builtin_names().any(|name| name == alias) {
                return Err(PresetError::ConfigurationError(format!(
                    "Alias '{}' collides with a built-in category",
                    alias
                )));
            }
        }
        Ok(())
    }

    /// Builds the registry this configuration describes.
    pub fn build(&self) -> PresetResult<Registry> {
        build_registry_with(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.aliases.get("distance").map(String::as_str), Some("length"));
        assert_eq!(config.aliases.get("speed").map(String::as_str), Some("velocity"));
    }

    #[test]
    fn test_category_subset() {
        let config = RegistryConfig::from_toml_str(
            r#"
            [registry]
            categories = ["length", "time"]
            "#,
        )
        .unwrap();
        let registry = config.build().unwrap();
        assert!(registry.contains("length"));
        assert!(registry.contains("time"));
        assert!(registry.contains("distance"));
        assert!(!registry.contains("velocity"));
        assert!(!registry.contains("speed"));
        assert!(registry.contains("amountOfSubstance"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = RegistryConfig::from_toml_str(
            r#"
            [registry]
            categories = ["length", "colour"]
            "#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            PresetError::ConfigurationError("Unknown category: colour".to_string())
        );
    }

    #[test]
    fn test_custom_aliases_replace_defaults() {
        let config = RegistryConfig::from_toml_str(
            r#"
            [aliases]
            heat = "temperature"
            "#,
        )
        .unwrap();
        let registry = config.build().unwrap();
        assert!(registry.shares_table("heat", "temperature"));
        assert!(!registry.contains("distance"));
    }

    #[test]
    fn test_chained_aliases_sorting_before_target() {
        let config = RegistryConfig::from_toml_str(
            r#"
            [aliases]
            distance = "length"
            route = "distance"
            along = "distance"
            "#,
        )
        .unwrap();
        let registry = config.build().unwrap();
        assert!(registry.shares_table("along", "length"));
        assert!(registry.shares_table("route", "length"));
    }

    #[test]
    fn test_alias_named_like_category_rejected() {
        let err = RegistryConfig::from_toml_str(
            r#"
            [aliases]
            length = "time"
            "#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            PresetError::ConfigurationError(
                "Alias 'length' collides with a built-in category".to_string()
            )
        );
    }

    #[test]
    fn test_invalid_toml() {
        let err = RegistryConfig::from_toml_str("[registry\n").unwrap_err();
        assert!(matches!(err, PresetError::ConfigurationError(_)));
    }

    #[test]
    fn test_from_file_resolves_relative_base() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("base.json"),
            r#"{ "currency": { "conversions": { "cent": [0, 100], "euro": [0, 1] } } }"#,
        )
        .unwrap();
        let config_path = dir.path().join("presets.toml");
        std::fs::write(
            &config_path,
            "[registry]\nbase = \"base.json\"\ncategories = []\n\n[aliases]\nmoney = \"currency\"\n",
        )
        .unwrap();

        let config = RegistryConfig::from_file(&config_path).unwrap();
        assert_eq!(config.registry.base, Some(dir.path().join("base.json")));

        let registry = config.build().unwrap();
        assert_eq!(registry.categories().collect::<Vec<_>>(), vec!["currency", "money"]);
        let cents = registry.convert("money", "euro", "cent", 2.5).unwrap();
        assert!((cents - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_base_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[registry]\nbase = \"/nonexistent/base.json\"").unwrap();
        let config = RegistryConfig::from_file(file.path()).unwrap();
        assert!(matches!(
            config.build().unwrap_err(),
            PresetError::ConfigurationError(_)
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let err = RegistryConfig::from_file("/nonexistent/presets.toml").unwrap_err();
        assert!(matches!(err, PresetError::ConfigurationError(_)));
    }
}
