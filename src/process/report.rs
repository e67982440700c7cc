//! Processing reports.

use crate::model::Document;
use serde::{Deserialize, Serialize};

/// Outcome of processing one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReport {
    /// Points inserted across all projects
    pub total_points_added: usize,

    /// Number of projects detected in the document
    pub projects_detected: usize,

    /// Per-project outcome, in distribution order
    pub projects: Vec<ProjectReport>,

    /// Category names consumed
    pub categories: Vec<String>,

    /// Dominant bullet marker of the document
    pub document_marker: String,
}

impl ProcessReport {
    /// Projects whose insertion failed.
    pub fn failures(&self) -> impl Iterator<Item = &ProjectReport> {
        self.projects.iter().filter(|p| p.error.is_some())
    }
}

/// Outcome for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReport {
    /// Position of the project in the detected project list
    pub project_index: usize,

    /// Project display name
    pub name: String,

    /// Planned point texts
    pub points: Vec<String>,

    /// Number of points actually inserted
    pub added: usize,

    /// Insertion error, if the project was left untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A processed copy of a document, for review before committing.
#[derive(Debug, Clone)]
pub struct Preview {
    /// The processed copy
    pub document: Document,

    /// Processing report for the copy
    pub report: ProcessReport,

    /// Non-empty paragraph texts separated by blank lines
    pub content: String,
}

impl Preview {
    /// Planned point texts per project name.
    pub fn project_points(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.report
            .projects
            .iter()
            .filter(|p| !p.points.is_empty())
            .map(|p| (p.name.as_str(), p.points.as_slice()))
    }
}
