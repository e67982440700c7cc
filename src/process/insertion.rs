//! Insertion point resolution.
//!
//! New points go after the paragraph returned by [`insertion_point`]. The
//! candidates are tried in order:
//!
//! 1. the last bullet in the project span
//! 2. a responsibilities/duties/achievements paragraph
//! 3. the first paragraph that starts with a bullet glyph
//! 4. the line after the role, before the next non-empty paragraph
//! 5. the first paragraph of the span

use crate::error::{Error, Result};
use crate::format::BulletFormatter;
use crate::model::{Document, ProjectRecord};

const SECTION_WORDS: [&str; 3] = ["responsibilities", "duties", "achievements"];

/// Characters that visually start a bullet, wider than the marker set.
const BULLET_GLYPHS: &[char] = &[
    '•', '●', '○', '◦', '■', '□', '▪', '▫', '‣', '➢', '➤', '►', '▸', '✓', '✔', '-', '–', '—', '*', '+',
];

/// Check that a project span is well formed and inside the document.
pub fn validate_span(doc: &Document, project: &ProjectRecord) -> Result<()> {
    if project.start_index > project.end_index {
        return Err(Error::InvalidSpan {
            start: project.start_index,
            end: project.end_index,
        });
    }
    if project.end_index >= doc.len() {
        return Err(Error::ParagraphOutOfRange(project.end_index, doc.len()));
    }
    Ok(())
}

/// Resolve the paragraph after which new points are inserted.
pub fn insertion_point(formatter: &BulletFormatter, doc: &Document, project: &ProjectRecord) -> Result<usize> {
    validate_span(doc, project)?;
    let span = project.start_index..=project.end_index;

    if let Some(i) = span.clone().rev().find(|&i| formatter.is_bullet(&doc.text_at(i))) {
        return Ok(i);
    }

    if let Some(i) = span.clone().find(|&i| {
        let lower = doc.text_at(i).to_lowercase();
        SECTION_WORDS.iter().any(|w| lower.contains(w))
    }) {
        return Ok(i);
    }

    if let Some(i) = span.clone().find(|&i| doc.text_at(i).starts_with(BULLET_GLYPHS)) {
        return Ok(i);
    }

    if let Some(i) = after_role(doc, project) {
        return Ok(i);
    }

    Ok(project.start_index)
}

/// The paragraph before the first non-empty paragraph following the role line.
fn after_role(doc: &Document, project: &ProjectRecord) -> Option<usize> {
    let role = project.role.trim();
    if role.is_empty() {
        return None;
    }

    let role_index =
        (project.start_index..=project.end_index).find(|&i| doc.text_at(i).contains(role))?;
    let next = (role_index + 1..doc.len())
        .find(|&i| !doc.text_at(i).is_empty())
        .unwrap_or(doc.len());
    Some((next - 1).min(project.end_index))
}
