//! Paragraph and run-level types.
//!
//! Style attributes are tri-state (`None` means "inherited from the style
//! sheet"), the way word-processing documents store them.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline content in the paragraph
    pub content: Vec<InlineContent>,

    /// Paragraph style
    #[serde(default)]
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    ///
    /// Embedded `\n` characters become line breaks, so a two-line header
    /// keeps its physical line structure.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a paragraph that takes part in a native numbered/bulleted list.
    pub fn list_item(text: impl Into<String>, num_id: u32, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.style.numbering = Some(NumberingProperties { num_id, level });
        p.style.style_name = Some("List Bullet".to_string());
        p
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.content.push(InlineContent::LineBreak);
            }
            if !line.is_empty() {
                self.content.push(InlineContent::Text(TextRun::new(line)));
            }
        }
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.content.push(InlineContent::Text(run));
    }

    /// Add a line break.
    pub fn add_line_break(&mut self) {
        self.content.push(InlineContent::LineBreak);
    }

    /// Remove all inline content, keeping the paragraph style.
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Iterate over the text runs of the paragraph.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.content.iter().filter_map(|c| match c {
            InlineContent::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                InlineContent::Text(run) => run.text.as_str(),
                InlineContent::LineBreak => "\n",
                InlineContent::Tab => "\t",
            })
            .collect()
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }

    /// Check if this paragraph takes part in a native list.
    pub fn is_list_item(&self) -> bool {
        self.style.numbering.is_some()
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineContent {
    /// A text run with styling
    Text(TextRun),

    /// A line break inside the paragraph
    LineBreak,

    /// A tab character
    Tab,
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    #[serde(default)]
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with inherited style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a text run with an explicit style.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(
            text,
            TextStyle {
                bold: Some(true),
                ..Default::default()
            },
        )
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Run-level styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font family name
    pub font_name: Option<String>,

    /// Font size in points
    pub font_size: Option<f32>,

    /// Bold text
    pub bold: Option<bool>,

    /// Italic text
    pub italic: Option<bool>,

    /// Underlined text
    pub underline: Option<bool>,

    /// Text color as six hex digits (e.g., "1F3864")
    pub color: Option<String>,
}

impl TextStyle {
    /// Check if any styling is set explicitly.
    pub fn has_styling(&self) -> bool {
        self.font_name.is_some()
            || self.font_size.is_some()
            || self.bold.is_some()
            || self.italic.is_some()
            || self.underline.is_some()
            || self.color.is_some()
    }
}

/// Paragraph-level styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Named style from the style sheet (e.g., "List Bullet")
    pub style_name: Option<String>,

    /// Paragraph layout
    #[serde(default)]
    pub layout: ParagraphLayout,

    /// Native list participation
    pub numbering: Option<NumberingProperties>,
}

/// Paragraph layout attributes. Lengths are in points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphLayout {
    /// Text alignment
    pub alignment: Option<Alignment>,

    /// First line indent
    pub first_line_indent: Option<f32>,

    /// Left indent
    pub left_indent: Option<f32>,

    /// Right indent
    pub right_indent: Option<f32>,

    /// Space before paragraph
    pub space_before: Option<f32>,

    /// Space after paragraph
    pub space_after: Option<f32>,

    /// Line spacing multiplier (1.0 = single)
    pub line_spacing: Option<f32>,

    /// Keep all lines on one page
    pub keep_together: Option<bool>,

    /// Keep with the next paragraph
    pub keep_with_next: Option<bool>,

    /// Start on a new page
    pub page_break_before: Option<bool>,

    /// Widow/orphan control
    pub widow_control: Option<bool>,
}

impl ParagraphLayout {
    /// Check if no attribute is set explicitly.
    pub fn is_inherited(&self) -> bool {
        *self == Self::default()
    }

    /// Copy every explicitly set attribute of `other` onto `self`.
    pub fn overlay(&mut self, other: &ParagraphLayout) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        take!(
            alignment,
            first_line_indent,
            left_indent,
            right_indent,
            space_before,
            space_after,
            line_spacing,
            keep_together,
            keep_with_next,
            page_break_before,
            widow_control
        );
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// Reference into the document's numbering definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingProperties {
    /// Numbering definition identifier
    pub num_id: u32,

    /// Nesting level (0 = top level)
    pub level: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_text("Hello ");
        p.add_run(TextRun::bold("world"));
        p.add_text("!");

        assert_eq!(p.plain_text(), "Hello world!");
    }

    #[test]
    fn test_with_text_keeps_line_breaks() {
        let p = Paragraph::with_text("ABC Corp | 2020\nBackend Engineer");
        assert_eq!(p.plain_text(), "ABC Corp | 2020\nBackend Engineer");
        assert!(p.content.contains(&InlineContent::LineBreak));
    }

    #[test]
    fn test_list_item() {
        let p = Paragraph::list_item("Shipped things", 3, 1);
        assert!(p.is_list_item());
        assert_eq!(
            p.style.numbering,
            Some(NumberingProperties { num_id: 3, level: 1 })
        );
    }

    #[test]
    fn test_empty_paragraph() {
        assert!(Paragraph::new().is_empty());
        assert!(Paragraph::with_text("   ").is_empty());
        assert!(!Paragraph::with_text("x").is_empty());
    }

    #[test]
    fn test_text_style() {
        let style = TextStyle::default();
        assert!(!style.has_styling());

        let bold_style = TextStyle {
            bold: Some(false),
            ..Default::default()
        };
        assert!(bold_style.has_styling());
    }

    #[test]
    fn test_layout_overlay() {
        let mut base = ParagraphLayout {
            left_indent: Some(18.0),
            space_after: Some(6.0),
            ..Default::default()
        };
        let other = ParagraphLayout {
            left_indent: Some(36.0),
            keep_with_next: Some(true),
            ..Default::default()
        };
        base.overlay(&other);

        assert_eq!(base.left_indent, Some(36.0));
        assert_eq!(base.space_after, Some(6.0));
        assert_eq!(base.keep_with_next, Some(true));
        assert!(!base.is_inherited());
    }
}
