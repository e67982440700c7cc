//! Bullet formatter options.

use crate::markers::MarkerSet;

/// Options for bullet formatting.
#[derive(Debug, Clone)]
pub struct FormatterOptions {
    /// Markers that make a paragraph a bullet (dash variants included)
    pub bullet_markers: MarkerSet,

    /// Paragraphs containing one of these words are ignored by marker counting
    pub skip_keywords: Vec<String>,

    /// Marker reported when a document has no bullets
    pub default_marker: String,
}

impl FormatterOptions {
    /// Create new formatter options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bullet markers.
    pub fn with_bullet_markers(mut self, markers: MarkerSet) -> Self {
        self.bullet_markers = markers;
        self
    }

    /// Set the keywords that exclude a paragraph from marker counting.
    pub fn with_skip_keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        self.skip_keywords = keywords
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .collect();
        self
    }

    /// Set the default marker.
    pub fn with_default_marker(mut self, marker: impl Into<String>) -> Self {
        self.default_marker = marker.into();
        self
    }
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            bullet_markers: MarkerSet::formatter(),
            skip_keywords: ["experience", "education", "skills", "summary", "objective"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            default_marker: "- ".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_options_defaults() {
        let options = FormatterOptions::default();
        assert_eq!(options.default_marker, "- ");
        assert!(options.skip_keywords.contains(&"objective".to_string()));
        assert!(options.bullet_markers.is_bullet("— Led migration"));
    }

    #[test]
    fn test_formatter_options_builder() {
        let options = FormatterOptions::new()
            .with_skip_keywords(["Profile"])
            .with_default_marker("• ");
        assert_eq!(options.skip_keywords, vec!["profile"]);
        assert_eq!(options.default_marker, "• ");
    }
}
