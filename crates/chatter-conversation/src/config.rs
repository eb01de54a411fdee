use serde::{Deserialize, Serialize};

use chatter_richtext::{DEFAULT_DELIMITER, EmphasisStyle};

/// How message bodies are decorated for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Emphasis delimiter, used in pairs.
    pub delimiter: char,
    /// Style given to text between a delimiter pair.
    pub emphasis: EmphasisStyle,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            emphasis: EmphasisStyle::Bold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.delimiter, '*');
        assert_eq!(config.emphasis, EmphasisStyle::Bold);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: DisplayConfig = serde_json::from_str(r#"{"emphasis": "italic"}"#).unwrap();
        assert_eq!(config.delimiter, '*');
        assert_eq!(config.emphasis, EmphasisStyle::Italic);

        let config: DisplayConfig = serde_json::from_str(r#"{"delimiter": "_"}"#).unwrap();
        assert_eq!(config.delimiter, '_');
        assert_eq!(config.emphasis, EmphasisStyle::Bold);
    }
}
