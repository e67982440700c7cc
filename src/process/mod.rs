//! Document processing.
//!
//! [`DocumentProcessor`] ties the pieces together: it detects the dominant
//! bullet marker and the projects, plans the distribution and inserts the
//! planned points as new bullet paragraphs.
//!
//! Spans are positional. After `k` paragraphs are inserted after position
//! `a`, every project span is shifted in one step (see
//! [`ProjectRecord::shift_after`]) before the next project is handled.

mod insertion;
mod options;
mod report;

pub use insertion::{insertion_point, validate_span};
pub use options::ProcessOptions;
pub use report::{Preview, ProcessReport, ProjectReport};

use crate::detect::ProjectDetector;
use crate::distribute::{DistributionResult, PointDistributor};
use crate::error::{Error, Result};
use crate::format::{BulletFormatter, BulletFormatting};
use crate::model::{Document, Paragraph, PointRecord, PointsPayload, ProjectRecord};

/// Inserts tech-stack points into the projects of a document.
#[derive(Debug, Clone, Default)]
pub struct DocumentProcessor {
    detector: ProjectDetector,
    formatter: BulletFormatter,
    distributor: PointDistributor,
}

/// Where a batch of points went.
struct Insertion {
    anchor: usize,
    added: usize,
}

impl DocumentProcessor {
    /// Create a processor with the given options.
    pub fn new(options: ProcessOptions) -> Self {
        let mut distributor = PointDistributor::new().with_threshold(options.company_match_threshold);
        if let Some(hint) = options.priority {
            distributor = distributor.with_priority(hint);
        }
        Self {
            detector: ProjectDetector::new(options.detector),
            formatter: BulletFormatter::new(options.formatter),
            distributor,
        }
    }

    /// Get the project detector.
    pub fn detector(&self) -> &ProjectDetector {
        &self.detector
    }

    /// Get the bullet formatter.
    pub fn formatter(&self) -> &BulletFormatter {
        &self.formatter
    }

    /// Get the point distributor.
    pub fn distributor(&self) -> &PointDistributor {
        &self.distributor
    }

    /// Insert the points of `payload` into the projects of `doc`.
    ///
    /// Fails with [`Error::NoProjectsFound`] when the document has no
    /// detectable project. A failure while inserting into one project is
    /// recorded in the report and does not stop the others.
    pub fn process(&self, doc: &mut Document, payload: &PointsPayload) -> Result<ProcessReport> {
        let document_marker = self.formatter.detect_document_bullet_marker(doc);
        log::info!("Detected document bullet marker: '{}'", document_marker);

        let mut projects = self.detector.find_projects(doc);
        if projects.is_empty() {
            return Err(Error::NoProjectsFound);
        }

        let distribution = self.distributor.distribute(&projects, payload);
        let report = self.apply_distribution(doc, &mut projects, &distribution, &document_marker);
        if report.total_points_added > 0 {
            doc.touch();
        }

        log::info!(
            "Document processed, added {} points to {} projects",
            report.total_points_added,
            report.projects.iter().filter(|p| p.added > 0).count()
        );
        Ok(report)
    }

    /// Process a copy of `doc` and render its text.
    pub fn preview(&self, doc: &Document, payload: &PointsPayload) -> Result<Preview> {
        let mut document = doc.clone();
        let report = self.process(&mut document, payload)?;
        let content = crate::render::to_text(&document);
        Ok(Preview {
            document,
            report,
            content,
        })
    }

    /// Insert planned points project by project.
    ///
    /// A project whose insertion fails is logged, reported with zero added
    /// points and its error, and skipped.
    pub fn apply_distribution(
        &self,
        doc: &mut Document,
        projects: &mut [ProjectRecord],
        distribution: &DistributionResult,
        document_marker: &str,
    ) -> ProcessReport {
        let mut report = ProcessReport {
            projects_detected: projects.len(),
            categories: distribution.categories.clone(),
            document_marker: document_marker.to_string(),
            ..Default::default()
        };

        for allocation in &distribution.distribution {
            let mut project_report = ProjectReport {
                project_index: allocation.project_index,
                name: allocation.name.clone(),
                points: allocation.points.iter().map(|p| p.text.clone()).collect(),
                added: 0,
                error: None,
            };

            let outcome = match projects.get_mut(allocation.project_index) {
                Some(project) => self.insert_points(doc, project, &allocation.points, document_marker),
                None => Err(Error::Other(format!(
                    "Project {} not found",
                    allocation.project_index
                ))),
            };

            match outcome {
                Ok(insertion) => {
                    for (i, other) in projects.iter_mut().enumerate() {
                        if i != allocation.project_index {
                            other.shift_after(insertion.anchor, insertion.added);
                        }
                    }
                    project_report.added = insertion.added;
                    report.total_points_added += insertion.added;
                }
                Err(err) => {
                    log::error!("Failed to add points to project '{}': {}", allocation.name, err);
                    project_report.error = Some(err.to_string());
                }
            }
            report.projects.push(project_report);
        }

        report
    }

    /// Insert `points` into one project and return how many were added.
    ///
    /// The project's `end_index` grows by the number of inserted
    /// paragraphs. Spans of other projects are not touched.
    pub fn add_points_to_project(
        &self,
        doc: &mut Document,
        project: &mut ProjectRecord,
        points: &[PointRecord],
        document_marker: &str,
    ) -> Result<usize> {
        self.insert_points(doc, project, points, document_marker)
            .map(|insertion| insertion.added)
    }

    /// Formatting used for new bullets of a project.
    ///
    /// Taken from the first existing bullet in the span; projects without
    /// bullets get the document marker.
    pub fn project_formatting(&self, doc: &Document, project: &ProjectRecord, document_marker: &str) -> BulletFormatting {
        let last = project.end_index.min(doc.len().saturating_sub(1));
        (project.start_index..=last)
            .find_map(|i| self.formatter.extract_formatting(doc, i))
            .map(|extracted| extracted.into_formatting())
            .unwrap_or_else(|| {
                log::debug!(
                    "No bullets in project '{}', using document marker '{}'",
                    project.name,
                    document_marker
                );
                BulletFormatting::for_marker(document_marker)
            })
    }

    fn insert_points(
        &self,
        doc: &mut Document,
        project: &mut ProjectRecord,
        points: &[PointRecord],
        document_marker: &str,
    ) -> Result<Insertion> {
        if points.is_empty() {
            return Ok(Insertion {
                anchor: project.start_index,
                added: 0,
            });
        }

        let anchor = insertion_point(&self.formatter, doc, project)?;
        let formatting = self.project_formatting(doc, project, document_marker);
        let fallback = BulletFormatting::for_marker(document_marker);

        let mut cursor = anchor;
        for point in points {
            let mut paragraph = Paragraph::new();
            self.formatter
                .apply_formatting(&mut paragraph, Some(&formatting), &point.text, Some(&fallback));
            cursor = doc.insert_paragraph_after(cursor, paragraph)?;
        }

        let added = cursor - anchor;
        project.end_index += added;
        log::debug!(
            "Added {} points to project '{}' after paragraph {} with marker '{}'",
            added,
            project.name,
            anchor,
            formatting.marker
        );
        Ok(Insertion { anchor, added })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryPoints;

    fn resume() -> Document {
        Document::from_lines([
            "Jane Doe",
            "Work Experience",
            "Acme Corp | Jan 2020 - Present",
            "Backend Engineer",
            "- Built billing",
            "Globex | 2017 - 2019",
            "- Ran on-call",
            "Education",
        ])
    }

    #[test]
    fn test_process_inserts_after_last_bullet() {
        let mut doc = resume();
        let payload = PointsPayload::Categorized(vec![CategoryPoints::new("Rust", ["• Wrote a parser", "Tuned allocs"])]);

        let report = DocumentProcessor::default().process(&mut doc, &payload).unwrap();

        assert_eq!(report.total_points_added, 2);
        assert_eq!(report.document_marker, "-");
        assert_eq!(doc.text_at(5), "- Wrote a parser");
        assert_eq!(doc.text_at(8), "- Tuned allocs");
        assert_eq!(doc.len(), 10);
        assert!(doc.metadata.modified.is_some());
    }

    #[test]
    fn test_process_without_projects() {
        let mut doc = Document::from_lines(["Jane Doe", "jane@example.com"]);
        let payload = PointsPayload::flat(["a"], ["Rust"]);
        let err = DocumentProcessor::default().process(&mut doc, &payload).unwrap_err();
        assert!(matches!(err, Error::NoProjectsFound));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_add_points_grows_span() {
        let mut doc = resume();
        let processor = DocumentProcessor::default();
        let mut project = processor.detector().find_projects(&doc).remove(0);
        let points = vec![PointRecord::new("One", "Rust", 0), PointRecord::new("Two", "Rust", 1)];

        let added = processor.add_points_to_project(&mut doc, &mut project, &points, "-").unwrap();

        assert_eq!(added, 2);
        assert_eq!((project.start_index, project.end_index), (2, 6));
        assert_eq!(doc.text_at(5), "- One");
        assert_eq!(doc.text_at(6), "- Two");
        assert_eq!(doc.text_at(7), "Globex | 2017 - 2019");
    }

    #[test]
    fn test_add_points_out_of_range() {
        let mut doc = resume();
        let mut project = ProjectRecord::new("Ghost", 3);
        project.end_index = 40;
        let points = vec![PointRecord::new("One", "Rust", 0)];

        let result = DocumentProcessor::default().add_points_to_project(&mut doc, &mut project, &points, "-");
        assert!(matches!(result, Err(Error::ParagraphOutOfRange(40, 8))));
        assert_eq!(doc.len(), 8);
    }

    #[test]
    fn test_project_formatting_falls_back_to_document_marker() {
        let doc = Document::from_lines(["Acme | 2020", "Plain line"]);
        let mut project = ProjectRecord::new("Acme", 0);
        project.end_index = 1;

        let formatting = DocumentProcessor::default().project_formatting(&doc, &project, "•");
        assert_eq!(formatting.marker, "•");
        assert!(formatting.list_format.is_list);
    }

    #[test]
    fn test_preview_leaves_original_untouched() {
        let doc = resume();
        let payload = PointsPayload::flat(["Shipped a cache"], ["Rust"]);

        let preview = DocumentProcessor::default().preview(&doc, &payload).unwrap();

        assert_eq!(doc.len(), 8);
        assert_eq!(preview.document.len(), 9);
        assert!(preview.content.contains("- Shipped a cache"));
        assert!(preview.content.contains("\n\n"));
        let mapping: Vec<_> = preview.project_points().collect();
        assert_eq!(mapping, vec![("Acme Corp", &["Shipped a cache".to_string()][..])]);
    }
}
