//! Bullet formatting.
//!
//! Two rendering strategies exist, selected by the class of the marker:
//!
//! - dash-class markers (`-`, `–`, `—`) are typed into the paragraph text;
//! - iconic markers (`•`, `●`, `*`, ...) are rendered by the native list
//!   feature, so the paragraph inherits list participation and only the
//!   bullet text is written.

mod formatting;
mod options;

pub use formatting::{BulletFormatting, ExtractedFormatting, ListFormat};
pub use options::FormatterOptions;

use crate::markers::{clean_bullet_text, is_dash_class, is_numbered};
use crate::model::{Document, NumberingProperties, Paragraph, ParagraphLayout, TextRun, TextStyle};
use regex::Regex;
use std::sync::LazyLock;

/// Marker patterns tried in order; each captures the marker itself.
static MARKER_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"^\s*([-−–—])\s+").unwrap(),
        Regex::new(r"^\s*([•●◦·▪▫‣])\s+").unwrap(),
        Regex::new(r"^\s*(\*)\s+").unwrap(),
        Regex::new(r"^\s*(\+)\s+").unwrap(),
    ]
});

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{6}$").unwrap());

/// Detects, extracts and reapplies bullet formatting.
#[derive(Debug, Clone, Default)]
pub struct BulletFormatter {
    options: FormatterOptions,
}

impl BulletFormatter {
    /// Create a formatter with the given options.
    pub fn new(options: FormatterOptions) -> Self {
        Self { options }
    }

    /// Get the formatter options.
    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// Check if a text is a bullet according to the formatter markers.
    pub fn is_bullet(&self, text: &str) -> bool {
        self.options.bullet_markers.is_bullet(text)
    }

    /// Detect the dominant bullet marker of a document.
    ///
    /// Returns the most frequent marker (the first one seen wins a tie), or
    /// the default marker when no paragraph starts with one.
    pub fn detect_document_bullet_marker(&self, doc: &Document) -> String {
        let mut counts: Vec<(String, usize)> = Vec::new();

        for paragraph in doc.paragraphs() {
            let text = paragraph.plain_text();
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            let lower = text.to_lowercase();
            if self.options.skip_keywords.iter().any(|k| lower.contains(k.as_str())) {
                continue;
            }

            let Some(marker) = MARKER_PATTERNS
                .iter()
                .find_map(|pattern| pattern.captures(text))
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
            else {
                continue;
            };

            match counts.iter_mut().find(|(m, _)| m == marker) {
                Some((_, count)) => *count += 1,
                None => counts.push((marker.to_string(), 1)),
            }
        }

        let mut best: Option<&(String, usize)> = None;
        for entry in &counts {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }

        let marker = best
            .map(|(m, _)| m.clone())
            .unwrap_or_else(|| self.options.default_marker.clone());
        log::debug!("Detected document bullet marker '{}' from {:?}", marker, counts);
        marker
    }

    /// Extract the marker at the start of a bullet text.
    ///
    /// Falls back to `-` when no marker can be identified.
    pub fn extract_marker(&self, text: &str) -> String {
        let text = text.trim();

        if let Some(m) = MARKER_PATTERNS
            .iter()
            .find_map(|pattern| pattern.captures(text))
            .and_then(|caps| caps.get(1))
        {
            return m.as_str().to_string();
        }

        for marker in self.options.bullet_markers.markers() {
            if let Some(rest) = text.strip_prefix(marker.as_str()) {
                match rest.chars().next() {
                    Some(c) if c.is_alphanumeric() => {}
                    Some(_) => return marker.clone(),
                    None => {}
                }
            }
        }

        if is_numbered(text) {
            if let Some(end) = text.find(['.', ')']) {
                return text[..=end].to_string();
            }
        }

        "-".to_string()
    }

    /// Detect the whitespace between marker and text: a tab or a space.
    pub fn detect_separator(&self, text: &str) -> &'static str {
        let text = text.trim();
        for marker in self.options.bullet_markers.markers() {
            if let Some(rest) = text.strip_prefix(marker.as_str()) {
                if rest.starts_with('\t') {
                    return "\t";
                }
                if rest.starts_with(' ') {
                    return " ";
                }
            }
        }
        " "
    }

    /// Extract the formatting of the bullet paragraph at `index`.
    ///
    /// Returns `None` when there is no paragraph at `index` or it is not a
    /// bullet. When style attributes cannot be read, the minimal variant
    /// carries the marker and raw text instead.
    pub fn extract_formatting(&self, doc: &Document, index: usize) -> Option<ExtractedFormatting> {
        let paragraph = doc.paragraph(index)?;
        let text = paragraph.plain_text();
        if !self.is_bullet(&text) {
            return None;
        }

        let marker = self.extract_marker(&text);
        let Some((runs_formatting, paragraph_formatting)) = capture_style(paragraph) else {
            log::warn!("Could not read style of paragraph {}, using minimal formatting", index);
            return Some(ExtractedFormatting::Minimal { marker, text });
        };

        let style_name = paragraph
            .style
            .style_name
            .clone()
            .unwrap_or_else(|| "Normal".to_string());
        let numbering = paragraph.style.numbering;
        let list_format = ListFormat {
            is_list: true,
            level: numbering.map_or(0, |n| n.level),
            num_id: numbering.map_or(1, |n| n.num_id),
            style_name: paragraph
                .style
                .style_name
                .clone()
                .unwrap_or_else(|| ListFormat::default().style_name),
            indent: paragraph_formatting.left_indent,
        };

        let formatting = BulletFormatting {
            marker: String::new(),
            separator: self.detect_separator(&text).to_string(),
            style_name,
            runs_formatting,
            paragraph_formatting,
            list_format,
        }
        .with_marker(&marker);

        Some(ExtractedFormatting::Full(formatting))
    }

    /// Render `text` into `paragraph` as a bullet.
    ///
    /// `fallback` stands in for a missing `formatting`; without either a
    /// plain hyphen bullet is written.
    pub fn apply_formatting(
        &self,
        paragraph: &mut Paragraph,
        formatting: Option<&BulletFormatting>,
        text: &str,
        fallback: Option<&BulletFormatting>,
    ) {
        let formatting = formatting.or(fallback);
        let clean_text = clean_bullet_text(text);
        let marker = formatting
            .map(|f| f.marker.trim())
            .filter(|m| !m.is_empty())
            .unwrap_or("-");
        let separator = formatting
            .map(|f| f.separator.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(" ");
        let run_style = formatting.map(BulletFormatting::body_style).unwrap_or_default();

        paragraph.clear();

        if is_dash_class(marker) {
            paragraph.style.numbering = None;
            paragraph.add_run(TextRun::styled(
                format!("{}{}{}", marker, separator, clean_text),
                run_style,
            ));
            log::debug!("Applied dash bullet formatting with marker '{}'", marker);
            return;
        }

        if let Some(formatting) = formatting {
            let list = &formatting.list_format;
            paragraph.style.style_name = Some(if list.is_list {
                list.style_name.clone()
            } else {
                formatting.style_name.clone()
            });
            paragraph.style.layout.overlay(&formatting.paragraph_formatting);
            if list.is_list {
                paragraph.style.numbering = Some(NumberingProperties {
                    num_id: list.num_id,
                    level: list.level,
                });
            }
        }
        paragraph.add_run(TextRun::styled(clean_text, run_style));
        log::debug!("Applied list bullet formatting with marker '{}'", marker);
    }
}

/// Read run and layout styling, or `None` when an attribute is unreadable.
fn capture_style(paragraph: &Paragraph) -> Option<(Vec<TextStyle>, ParagraphLayout)> {
    let runs = paragraph
        .runs()
        .map(|run| valid_run_style(&run.style))
        .collect::<Option<Vec<_>>>()?;

    let layout = &paragraph.style.layout;
    let lengths = [
        layout.first_line_indent,
        layout.left_indent,
        layout.right_indent,
        layout.space_before,
        layout.space_after,
        layout.line_spacing,
    ];
    if lengths.iter().flatten().any(|v| !v.is_finite()) {
        return None;
    }

    Some((runs, layout.clone()))
}

fn valid_run_style(style: &TextStyle) -> Option<TextStyle> {
    if let Some(size) = style.font_size {
        if !size.is_finite() || size <= 0.0 {
            return None;
        }
    }
    if let Some(color) = &style.color {
        if !HEX_COLOR.is_match(color) {
            return None;
        }
    }
    Some(style.clone())
}
