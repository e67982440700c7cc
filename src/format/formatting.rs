//! Captured bullet formatting.

use crate::markers::is_dash_class;
use crate::model::{ParagraphLayout, TextStyle};
use serde::{Deserialize, Serialize};

/// Native list participation of a bullet paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListFormat {
    /// The paragraph is rendered by the native list feature
    pub is_list: bool,

    /// Nesting level (0 = top level)
    pub level: u8,

    /// Numbering definition identifier
    pub num_id: u32,

    /// List paragraph style name
    pub style_name: String,

    /// Left indent in points
    pub indent: Option<f32>,
}

impl Default for ListFormat {
    fn default() -> Self {
        Self {
            is_list: false,
            level: 0,
            num_id: 1,
            style_name: "List Bullet".to_string(),
            indent: None,
        }
    }
}

/// Style of one bullet paragraph, captured so that it can be reproduced.
///
/// A formatting whose marker is dash-class never has `list_format.is_list`
/// set: dashes are typed into the text, list glyphs are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletFormatting {
    /// Bullet marker without surrounding whitespace
    pub marker: String,

    /// Whitespace between marker and text
    pub separator: String,

    /// Paragraph style name
    pub style_name: String,

    /// Per-run styling in run order
    pub runs_formatting: Vec<TextStyle>,

    /// Paragraph layout
    pub paragraph_formatting: ParagraphLayout,

    /// Native list participation
    pub list_format: ListFormat,
}

impl BulletFormatting {
    /// Formatting for a bullet with the given marker and no captured style.
    ///
    /// Iconic markers join list 1 at level 0.
    pub fn for_marker(marker: &str) -> Self {
        let formatting = Self {
            marker: String::new(),
            separator: separator_of(marker).to_string(),
            style_name: "Normal".to_string(),
            runs_formatting: vec![TextStyle::default()],
            paragraph_formatting: ParagraphLayout::default(),
            list_format: ListFormat {
                is_list: true,
                ..Default::default()
            },
        };
        formatting.with_marker(marker)
    }

    /// Formatting that carries only a marker.
    pub fn minimal(marker: &str) -> Self {
        let mut formatting = Self::for_marker(marker);
        formatting.separator = " ".to_string();
        formatting.list_format.is_list = false;
        formatting
    }

    /// Replace the marker, keeping the dash-class invariant.
    pub fn with_marker(mut self, marker: &str) -> Self {
        let marker = marker.trim();
        self.marker = if marker.is_empty() { "-" } else { marker }.to_string();
        if self.is_dash() {
            self.list_format.is_list = false;
        }
        self
    }

    /// Check if the marker is dash-class.
    pub fn is_dash(&self) -> bool {
        is_dash_class(&self.marker)
    }

    /// Style of the run that carries the bullet text.
    ///
    /// A marker typed in its own run comes first, so this is the last run.
    pub fn body_style(&self) -> TextStyle {
        self.runs_formatting.last().cloned().unwrap_or_default()
    }
}

/// Result of style extraction.
///
/// Extraction is best-effort: when style attributes cannot be read the
/// marker and raw text are still reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractedFormatting {
    /// Everything was captured
    Full(BulletFormatting),

    /// Style attributes could not be read
    Minimal {
        /// Detected marker
        marker: String,
        /// Raw paragraph text
        text: String,
    },
}

impl ExtractedFormatting {
    /// The detected marker.
    pub fn marker(&self) -> &str {
        match self {
            ExtractedFormatting::Full(formatting) => &formatting.marker,
            ExtractedFormatting::Minimal { marker, .. } => marker,
        }
    }

    /// Check if extraction fell back to the minimal variant.
    pub fn is_minimal(&self) -> bool {
        matches!(self, ExtractedFormatting::Minimal { .. })
    }

    /// Turn the extraction into a formatting usable for rendering.
    pub fn into_formatting(self) -> BulletFormatting {
        match self {
            ExtractedFormatting::Full(formatting) => formatting,
            ExtractedFormatting::Minimal { marker, .. } => BulletFormatting::minimal(&marker),
        }
    }
}

/// The whitespace after a marker string, or a single space.
fn separator_of(marker: &str) -> &str {
    let trimmed = marker.trim_end();
    match &marker[trimmed.len()..] {
        "" => " ",
        rest if rest.starts_with('\t') => "\t",
        _ => " ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_marker_dash() {
        let formatting = BulletFormatting::for_marker("- ");
        assert_eq!(formatting.marker, "-");
        assert_eq!(formatting.separator, " ");
        assert!(formatting.is_dash());
        assert!(!formatting.list_format.is_list);
    }

    #[test]
    fn test_for_marker_iconic() {
        let formatting = BulletFormatting::for_marker("•\t");
        assert_eq!(formatting.marker, "•");
        assert_eq!(formatting.separator, "\t");
        assert!(formatting.list_format.is_list);
        assert_eq!(formatting.list_format.num_id, 1);
        assert_eq!(formatting.list_format.level, 0);
    }

    #[test]
    fn test_with_marker_clears_list_for_dash() {
        let formatting = BulletFormatting::for_marker("•").with_marker("—");
        assert_eq!(formatting.marker, "—");
        assert!(!formatting.list_format.is_list);

        let formatting = BulletFormatting::for_marker("•").with_marker("  ");
        assert_eq!(formatting.marker, "-");
    }

    #[test]
    fn test_minimal_into_formatting() {
        let extracted = ExtractedFormatting::Minimal {
            marker: "•".to_string(),
            text: "• Built it".to_string(),
        };
        assert!(extracted.is_minimal());
        assert_eq!(extracted.marker(), "•");

        let formatting = extracted.into_formatting();
        assert_eq!(formatting.marker, "•");
        assert!(!formatting.list_format.is_list);
        assert_eq!(formatting.style_name, "Normal");
    }
}
