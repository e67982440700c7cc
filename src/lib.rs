//! # respoint
//!
//! Tech-stack bullet point insertion for resume documents.
//!
//! This library finds the project/experience entries of a resume held as an
//! in-memory word-processing document, plans how many of a set of supplied
//! bullet points each project receives, and inserts them as new paragraphs
//! that match the bullet style already used in the document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use respoint::{load_document, load_points, render};
//!
//! fn main() -> respoint::Result<()> {
//!     let mut doc = load_document("resume.json")?;
//!     let points = load_points("points.json")?;
//!
//!     let report = respoint::process(&mut doc, &points)?;
//!     println!("Added {} points", report.total_points_added);
//!
//!     std::fs::write("resume.out.json", render::to_json(&doc, render::JsonFormat::Pretty)?)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Project detection**: section headings, company/date headers, standalone titles
//! - **Style preservation**: dash bullets are typed, list bullets inherit the native list
//! - **Fair distribution**: at most three projects, every point placed exactly once
//! - **Partial failure**: one broken project never blocks the others
//! - **Preview**: process a copy and review the text before committing

pub mod detect;
pub mod distribute;
pub mod error;
pub mod format;
pub mod markers;
pub mod model;
pub mod process;
pub mod render;

// Re-export commonly used types
pub use detect::{parse_header, DetectorOptions, ParsedHeader, ProjectDetector};
pub use distribute::{DistributionResult, PointDistributor, PriorityHint, ProjectAllocation, MAX_PROJECTS};
pub use error::{Error, Result};
pub use format::{BulletFormatter, BulletFormatting, ExtractedFormatting, FormatterOptions, ListFormat};
pub use markers::MarkerSet;
pub use model::{
    Alignment, CategoryPoints, Document, InlineContent, Metadata, NumberingProperties, Paragraph, ParagraphId,
    ParagraphLayout, ParagraphStyle, PointRecord, PointsPayload, ProjectRecord, TextRun, TextStyle,
};
pub use process::{DocumentProcessor, Preview, ProcessOptions, ProcessReport, ProjectReport};
pub use render::JsonFormat;

use std::path::Path;

/// Find the projects of a document with default options.
///
/// # Example
///
/// ```
/// use respoint::{find_projects, Document};
///
/// let doc = Document::from_lines(["Acme Corp | 2020 - Present", "- Built billing"]);
/// let projects = find_projects(&doc);
/// assert_eq!(projects[0].name, "Acme Corp");
/// ```
pub fn find_projects(doc: &Document) -> Vec<ProjectRecord> {
    ProjectDetector::default().find_projects(doc)
}

/// Detect the dominant bullet marker of a document.
pub fn detect_bullet_marker(doc: &Document) -> String {
    BulletFormatter::default().detect_document_bullet_marker(doc)
}

/// Plan the distribution of points over projects.
pub fn distribute(projects: &[ProjectRecord], payload: &PointsPayload) -> DistributionResult {
    PointDistributor::default().distribute(projects, payload)
}

/// Insert points into a document with default options.
///
/// # Example
///
/// ```
/// use respoint::{process, Document, PointsPayload};
///
/// let mut doc = Document::from_lines(["Acme Corp | 2020 - Present", "- Built billing"]);
/// let points = PointsPayload::flat(["Wrote a parser in Rust"], ["Rust"]);
///
/// let report = process(&mut doc, &points)?;
/// assert_eq!(report.total_points_added, 1);
/// assert_eq!(doc.text_at(2), "- Wrote a parser in Rust");
/// # Ok::<(), respoint::Error>(())
/// ```
pub fn process(doc: &mut Document, payload: &PointsPayload) -> Result<ProcessReport> {
    DocumentProcessor::default().process(doc, payload)
}

/// Process a copy of a document and render its text.
pub fn preview(doc: &Document, payload: &PointsPayload) -> Result<Preview> {
    DocumentProcessor::default().preview(doc, payload)
}

/// Parse a document from its JSON form.
pub fn document_from_json(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a points payload from JSON.
///
/// Accepts `{"points": [...], "categories": [...]}` or
/// `[{"category": "...", "points": [...]}, ...]`.
pub fn points_from_json(json: &str) -> Result<PointsPayload> {
    serde_json::from_str(json).map_err(|e| Error::InvalidPayload(e.to_string()))
}

/// Load a document from a JSON file.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let mut doc = document_from_json(&std::fs::read_to_string(path)?)?;
    if doc.metadata.file_name.is_none() {
        doc.metadata.file_name = path.file_name().map(|n| n.to_string_lossy().into_owned());
    }
    Ok(doc)
}

/// Load a points payload from a JSON file.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<PointsPayload> {
    points_from_json(&std::fs::read_to_string(path)?)
}

/// Builder for processing documents.
///
/// # Example
///
/// ```no_run
/// use respoint::{PriorityHint, Respoint};
///
/// let result = Respoint::new()
///     .within_section()
///     .with_company_match_threshold(80)
///     .with_priority(PriorityHint::new(["Acme"], 92))
///     .process_file("resume.json", "points.json")?;
/// println!("{}", result.report_json(respoint::JsonFormat::Pretty)?);
/// # Ok::<(), respoint::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Respoint {
    options: ProcessOptions,
}

impl Respoint {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the detector options.
    pub fn with_detector_options(mut self, options: DetectorOptions) -> Self {
        self.options = self.options.with_detector(options);
        self
    }

    /// Set the formatter options.
    pub fn with_formatter_options(mut self, options: FormatterOptions) -> Self {
        self.options = self.options.with_formatter(options);
        self
    }

    /// Only detect projects inside an experience section.
    pub fn within_section(mut self) -> Self {
        self.options.detector = self.options.detector.within_section();
        self
    }

    /// Do not take the line after a header as the role.
    pub fn without_role_line(mut self) -> Self {
        self.options.detector = self.options.detector.with_role_line(false);
        self
    }

    /// Set the company match threshold.
    pub fn with_company_match_threshold(mut self, threshold: u8) -> Self {
        self.options = self.options.with_company_match_threshold(threshold);
        self
    }

    /// Set a company priority hint.
    pub fn with_priority(mut self, hint: PriorityHint) -> Self {
        self.options = self.options.with_priority(hint);
        self
    }

    /// Build the document processor.
    pub fn processor(&self) -> DocumentProcessor {
        DocumentProcessor::new(self.options.clone())
    }

    /// Process a document and keep it with its report.
    pub fn process(&self, mut document: Document, payload: &PointsPayload) -> Result<RespointResult> {
        let report = self.processor().process(&mut document, payload)?;
        Ok(RespointResult { document, report })
    }

    /// Load a document and a points payload from JSON files and process them.
    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, document: P, points: Q) -> Result<RespointResult> {
        let payload = load_points(points)?;
        self.process(load_document(document)?, &payload)
    }
}

/// A processed document with its report.
#[derive(Debug, Clone)]
pub struct RespointResult {
    /// The processed document
    pub document: Document,
    /// What was inserted where
    pub report: ProcessReport,
}

impl RespointResult {
    /// Convert the document to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert the report to JSON.
    pub fn report_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.report, format)
    }

    /// Render the document text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn resume() -> Document {
        Document::from_lines([
            "Experience",
            "Acme Corp | Jan 2020 - Present",
            "• Built billing",
            "Globex | 2017 - 2019",
            "• Ran on-call",
        ])
    }

    #[test]
    fn test_respoint_builder() {
        let builder = Respoint::new()
            .within_section()
            .without_role_line()
            .with_company_match_threshold(90);

        assert!(builder.options.detector.require_section);
        assert!(!builder.options.detector.capture_role_line);
        assert_eq!(builder.options.company_match_threshold, 90);
    }

    #[test]
    fn test_respoint_builder_default() {
        let builder = Respoint::default();
        assert_eq!(builder.options.company_match_threshold, 70);
        assert!(builder.options.priority.is_none());
    }

    #[test]
    fn test_process_through_builder() {
        let payload = PointsPayload::flat(["Wrote a parser", "Tuned allocations"], ["Rust"]);
        let result = Respoint::new().process(resume(), &payload).unwrap();

        assert_eq!(result.report.total_points_added, 2);
        assert_eq!(result.report.document_marker, "•");
        assert!(result.to_text().contains("Wrote a parser"));
        assert!(result.report_json(JsonFormat::Compact).unwrap().contains("\"total_points_added\":2"));
    }

    #[test]
    fn test_convenience_functions() {
        let doc = resume();
        let projects = find_projects(&doc);
        assert_eq!(projects.len(), 2);
        assert_eq!(detect_bullet_marker(&doc), "•");

        let payload = PointsPayload::flat(["a", "b", "c"], ["Rust"]);
        let distribution = distribute(&projects, &payload);
        assert_eq!(distribution.total_assigned(), 3);
    }

    #[test]
    fn test_points_from_json_shapes() {
        let flat = points_from_json(r#"{"points": ["a", "b"], "categories": ["Rust"]}"#).unwrap();
        assert_eq!(flat.point_count(), 2);

        let grouped = points_from_json(r#"[{"category": "Rust", "points": ["a"]}]"#).unwrap();
        assert_eq!(grouped.category_names(), vec!["Rust".to_string()]);

        let err = points_from_json(r#"{"bullets": []}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidPayload(_)));
    }

    #[test]
    fn test_load_document_sets_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.json");
        let json = render::to_json(&resume(), JsonFormat::Compact).unwrap();
        std::fs::File::create(&path)
            .unwrap()
            .write_all(json.as_bytes())
            .unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.len(), 5);
        assert_eq!(doc.metadata.file_name.as_deref(), Some("resume.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_points("/definitely/not/here.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
