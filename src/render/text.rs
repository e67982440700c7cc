//! Plain text rendering for previews.

use crate::model::Document;

/// Render the non-empty paragraphs of a document, separated by blank lines.
pub fn to_text(doc: &Document) -> String {
    doc.paragraphs()
        .map(|p| p.plain_text())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text() {
        let doc = Document::from_lines(["Hello, world!", "", "  ", " Second paragraph. "]);
        assert_eq!(to_text(&doc), "Hello, world!\n\nSecond paragraph.");
    }

    #[test]
    fn test_to_text_empty() {
        assert_eq!(to_text(&Document::new()), "");
    }
}
