//! Error types for preset lookups, table loading and registry configuration.

/// Result type for preset operations
pub type PresetResult<T> = Result<T, PresetError>;

/// Error type for preset operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PresetError {
    /// No table is registered under this category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A table has no unit with this name.
    #[error("Unknown unit '{unit}'{}", category_suffix(.category))]
    UnknownUnit {
        /// Category searched, when known.
        category: Option<String>,
        /// Unit name that was not found.
        unit: String,
    },

    /// A scale with non-finite or coinciding reference readings.
    #[error("Invalid scale [{0}, {1}]: reference points must be finite and distinct")]
    InvalidScale(f64, f64),

    /// A table resource could not be parsed.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A registry or table could not be serialised.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Registry configuration could not be read or is inconsistent.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

fn category_suffix(category: &Option<String>) -> String {
    match category {
        Some(name) => format!(" in category '{}'", name),
        None => String::new(),
    }
}

impl PresetError {
    /// Attaches a category name to an [`PresetError::UnknownUnit`] raised by a bare table.
    pub fn in_category(self, name: &str) -> Self {
        match self {
            PresetError::UnknownUnit { unit, .. } => PresetError::UnknownUnit {
                category: Some(name.to_string()),
                unit,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_unit_message_mentions_category() {
        let err = PresetError::UnknownUnit {
            category: None,
            unit: "furlong".to_string(),
        }
        .in_category("length");
        assert_eq!(
            err.to_string(),
            "Unknown unit 'furlong' in category 'length'"
        );
    }

    #[test]
    fn test_in_category_leaves_other_errors_alone() {
        let err = PresetError::UnknownCategory("colour".to_string()).in_category("length");
        assert_eq!(err, PresetError::UnknownCategory("colour".to_string()));
    }

    #[test]
    fn test_serialization_error_is_not_a_parse_error() {
        let err = PresetError::SerializationError("key must be a string".to_string());
        assert_eq!(err.to_string(), "Serialization error: key must be a string");
        assert!(!matches!(err, PresetError::ParseError(_)));
    }
}
