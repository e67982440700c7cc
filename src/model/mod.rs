//! Document model types.
//!
//! This module defines the in-memory representation of a word-processing
//! document that detection reads and insertion mutates, together with the
//! records that flow between the detector, the distributor and the
//! processor. Decoding and encoding the binary file format happens outside
//! this crate.

mod document;
mod paragraph;
mod points;
mod project;

pub use document::{Document, Metadata, ParagraphId};
pub use paragraph::{
    Alignment, InlineContent, NumberingProperties, Paragraph, ParagraphLayout, ParagraphStyle,
    TextRun, TextStyle,
};
pub use points::{CategoryPoints, PointRecord, PointsPayload};
pub use project::ProjectRecord;
