//! Base default-table resource.
//!
//! Categories without a dedicated table module (amount of substance, luminous intensity) ship as
//! a JSON object embedded in the crate. The object maps category names to tables of the form
//! `{ "conversions": { "<unit>": [a, b], ... } }`; pairwise presets are regenerated on load.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use linear_presets_core::{ConversionTable, PresetError, PresetResult};

/// The embedded base resource.
pub const DEFAULT_BASE_JSON: &str = include_str!("../data/presets.json");

/// Tables keyed by category name, as read from a base resource.
pub type BaseTables = BTreeMap<String, ConversionTable>;

/// Parses a base resource.
///
/// Errors carry the JSON path of the offending entry, e.g.
/// `luminousIntensity.conversions.candela`.
pub fn parse_base(json: &str) -> PresetResult<BaseTables> {
    let de = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(de).map_err(|e| {
        PresetError::ParseError(format!("{} at '{}'", e.inner(), e.path()))
    })
}

/// Parses the embedded base resource.
pub fn default_base() -> PresetResult<BaseTables> {
    parse_base(DEFAULT_BASE_JSON)
}

/// Reads and parses a base resource from disk.
pub fn load_base_file<P: AsRef<Path>>(path: P) -> PresetResult<BaseTables> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        PresetError::ConfigurationError(format!(
            "Failed to read base presets {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    parse_base(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_categories() {
        let base = default_base().unwrap();
        let names: Vec<&str> = base.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["amountOfSubstance", "luminousIntensity"]);
    }

    #[test]
    fn test_parse_error_reports_path() {
        let json = r#"{ "luminousIntensity": { "conversions": { "candela": [0] } } }"#;
        let err = parse_base(json).unwrap_err();
        match err {
            PresetError::ParseError(msg) => {
                assert!(msg.contains("candela"), "{}", msg)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = load_base_file("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, PresetError::ConfigurationError(_)));
    }
}
