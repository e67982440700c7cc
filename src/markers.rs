//! Bullet marker vocabulary shared by the detector, the formatter and the
//! processor.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Markers recognized as bullets when scanning for projects.
pub const DETECTOR_MARKERS: &[&str] = &["•", "●", "◦", "▪", "▫", "‣", "*", "-"];

/// Dash-class markers: typed characters, not rendered by a list feature.
pub const DASH_VARIANTS: &[&str] = &["-", "–", "—"];

/// Characters stripped from the front of a point before it is rendered.
const STRIP_CHARS: &[char] = &['-', '–', '—', '•', '●', '*', '◦', '▪', '▫', '‣', ' ', '\t'];

static NUMBERED_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+[.)])").unwrap());

/// An ordered set of bullet markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    markers: Vec<String>,
}

impl MarkerSet {
    /// Create a marker set from explicit markers.
    pub fn new<S: Into<String>>(markers: impl IntoIterator<Item = S>) -> Self {
        Self {
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        }
    }

    /// The marker set used by project detection.
    pub fn detector() -> Self {
        Self::new(DETECTOR_MARKERS.iter().copied())
    }

    /// The marker set used by the formatter: detection markers plus dash variants.
    pub fn formatter() -> Self {
        let mut set = Self::detector();
        for dash in DASH_VARIANTS {
            if !set.markers.iter().any(|m| m == dash) {
                set.markers.push((*dash).to_string());
            }
        }
        set
    }

    /// The markers in priority order.
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// The first marker the trimmed text starts with.
    pub fn leading_marker(&self, text: &str) -> Option<&str> {
        let text = text.trim();
        self.markers
            .iter()
            .find(|m| text.starts_with(m.as_str()))
            .map(String::as_str)
    }

    /// Check if a line looks like a bullet point.
    ///
    /// A line is a bullet when it starts with one of the markers (with or
    /// without a following space) or is a numbered list item.
    pub fn is_bullet(&self, text: &str) -> bool {
        self.leading_marker(text).is_some() || is_numbered(text)
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::detector()
    }
}

/// Check if a marker is dash-class (`-`, `–`, `—`).
pub fn is_dash_class(marker: &str) -> bool {
    let marker = marker.trim();
    DASH_VARIANTS.contains(&marker) || marker == "−"
}

/// Check if a line starts like a numbered list item.
///
/// The first character is a digit and a `.` or `)` follows within the first
/// three characters (`1.`, `12.`, `3)`).
pub fn is_numbered(text: &str) -> bool {
    let text = text.trim();
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => text.chars().take(3).any(|c| c == '.' || c == ')'),
        _ => false,
    }
}

/// The leading numbered-list token (`"1."`, `"2)"`) of a line, if any.
pub fn numbered_token(text: &str) -> Option<&str> {
    NUMBERED_TOKEN
        .captures(text.trim_start())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Strip leading marker and indent characters plus a numbered-list token.
///
/// The result is NFC-normalized so that composed and decomposed input
/// render identically.
pub fn clean_bullet_text(text: &str) -> String {
    let normalized: String = text.nfc().collect();
    let stripped = normalized.trim_start_matches(STRIP_CHARS).trim_start();
    let stripped = match numbered_token(stripped) {
        Some(token) => stripped[token.len()..].trim_start(),
        None => stripped,
    };
    stripped.trim_end().to_string()
}
