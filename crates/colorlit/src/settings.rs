//! Host-facing options.
//!
//! The engine owns no configuration of its own; the host passes these in.
//! They can be loaded from YAML:
//!
//! ```rust
//! use colorlit::{Category, Settings};
//!
//! let settings = Settings::from_yaml("editor_sensitive: false").unwrap();
//! assert_eq!(settings.effective_category(Category::Glsl), Category::Any);
//! assert!(!settings.insert_on_change);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Restrict formats to the document's category. When off, every
    /// document is treated as [`Category::Any`].
    pub editor_sensitive: bool,
    /// Host re-inserts the literal on every edit instead of on confirmation.
    /// The engine itself does not read it.
    pub insert_on_change: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor_sensitive: true,
            insert_on_change: false,
        }
    }
}

impl Settings {
    /// Parses settings from a YAML mapping; missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// The category to scan with for a document of kind `document`.
    pub fn effective_category(&self, document: Category) -> Category {
        if self.editor_sensitive {
            document
        } else {
            Category::Any
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert!(s.editor_sensitive);
        assert!(!s.insert_on_change);
        assert_eq!(Settings::from_yaml("").unwrap(), s);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let s = Settings::from_yaml("insert_on_change: true\n").unwrap();
        assert!(s.editor_sensitive);
        assert!(s.insert_on_change);
    }

    #[test]
    fn invalid_yaml() {
        let err = Settings::from_yaml("editor_sensitive: [1, 2]").unwrap_err();
        assert!(matches!(err, ColorError::InvalidSettings(_)));
    }

    #[test]
    fn effective_category() {
        let sensitive = Settings::default();
        assert_eq!(sensitive.effective_category(Category::Qml), Category::Qml);

        let blind = Settings {
            editor_sensitive: false,
            ..Settings::default()
        };
        assert_eq!(blind.effective_category(Category::Qml), Category::Any);
        assert_eq!(blind.effective_category(Category::Any), Category::Any);
    }
}
