//! Document-level types.
//!
//! Paragraphs live in an append-only arena and are addressed by stable
//! [`ParagraphId`] handles. A separate order vector gives the positional
//! view that the detection heuristics scan. Inserting a paragraph only
//! touches the order vector, so handles held by callers stay valid; positions
//! after the insertion point shift by one.

use super::Paragraph;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable handle to a paragraph in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParagraphId(usize);

/// An in-memory word-processing document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "DocumentRepr", into = "DocumentRepr")]
pub struct Document {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    nodes: Vec<Paragraph>,
    order: Vec<ParagraphId>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from paragraphs in reading order.
    pub fn from_paragraphs(paragraphs: impl IntoIterator<Item = Paragraph>) -> Self {
        let mut doc = Self::new();
        for p in paragraphs {
            doc.push_paragraph(p);
        }
        doc
    }

    /// Create a document with one plain paragraph per string.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self::from_paragraphs(lines.into_iter().map(Paragraph::with_text))
    }

    /// Get the number of paragraphs in the document.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append a paragraph at the end of the document.
    pub fn push_paragraph(&mut self, paragraph: Paragraph) -> ParagraphId {
        let id = ParagraphId(self.nodes.len());
        self.nodes.push(paragraph);
        self.order.push(id);
        id
    }

    /// Get a paragraph by position.
    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        self.order.get(index).map(|id| &self.nodes[id.0])
    }

    /// Get a mutable paragraph by position.
    pub fn paragraph_mut(&mut self, index: usize) -> Option<&mut Paragraph> {
        let id = *self.order.get(index)?;
        Some(&mut self.nodes[id.0])
    }

    /// Get a paragraph by handle.
    pub fn get(&self, id: ParagraphId) -> Option<&Paragraph> {
        self.nodes.get(id.0)
    }

    /// Get a mutable paragraph by handle.
    pub fn get_mut(&mut self, id: ParagraphId) -> Option<&mut Paragraph> {
        self.nodes.get_mut(id.0)
    }

    /// Get the handle of the paragraph at a position.
    pub fn id_at(&self, index: usize) -> Option<ParagraphId> {
        self.order.get(index).copied()
    }

    /// Get the current position of a paragraph handle.
    pub fn position_of(&self, id: ParagraphId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    /// Trimmed plain text of the paragraph at a position (empty when out of range).
    pub fn text_at(&self, index: usize) -> String {
        self.paragraph(index)
            .map(|p| p.plain_text().trim().to_string())
            .unwrap_or_default()
    }

    /// Iterate over paragraphs in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.order.iter().map(move |id| &self.nodes[id.0])
    }

    /// Insert a paragraph directly after the one at `index`.
    ///
    /// Returns the position of the new paragraph (`index + 1`). Every
    /// position greater than `index` moves up by one.
    pub fn insert_paragraph_after(&mut self, index: usize, paragraph: Paragraph) -> Result<usize> {
        if index >= self.order.len() {
            return Err(Error::ParagraphOutOfRange(index, self.order.len()));
        }
        let id = ParagraphId(self.nodes.len());
        self.nodes.push(paragraph);
        self.order.insert(index + 1, id);
        Ok(index + 1)
    }

    /// Insert a paragraph directly after the paragraph with handle `anchor`.
    pub fn insert_after(&mut self, anchor: ParagraphId, paragraph: Paragraph) -> Result<ParagraphId> {
        let index = self
            .position_of(anchor)
            .ok_or(Error::ParagraphOutOfRange(anchor.0, self.nodes.len()))?;
        let position = self.insert_paragraph_after(index, paragraph)?;
        Ok(self.order[position])
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.paragraphs()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Record a modification time in the metadata.
    pub fn touch(&mut self) {
        self.metadata.modified = Some(Utc::now());
    }
}

/// Serialized form: paragraphs flattened in document order.
#[derive(Serialize, Deserialize)]
struct DocumentRepr {
    #[serde(default)]
    metadata: Metadata,
    #[serde(default)]
    paragraphs: Vec<Paragraph>,
}

impl From<DocumentRepr> for Document {
    fn from(repr: DocumentRepr) -> Self {
        let mut doc = Document::from_paragraphs(repr.paragraphs);
        doc.metadata = repr.metadata;
        doc
    }
}

impl From<Document> for DocumentRepr {
    fn from(doc: Document) -> Self {
        let Document {
            metadata,
            mut nodes,
            order,
        } = doc;
        let paragraphs = order
            .into_iter()
            .map(|id| std::mem::take(&mut nodes[id.0]))
            .collect();
        DocumentRepr {
            metadata,
            paragraphs,
        }
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Source file name, when the caller knows it
    pub file_name: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}
