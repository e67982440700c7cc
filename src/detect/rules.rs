//! Ordered detection rules.
//!
//! Each paragraph is tested against [`RULE_CHAIN`] in order and the first
//! rule whose predicate holds fires. The predicates only look at trimmed
//! line texts and the scan state, so each one can be exercised with plain
//! strings.

use super::header::looks_like_company_date;
use super::DetectorOptions;
use crate::model::ProjectRecord;

/// One detection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// An experience section heading; sets the section flag
    SectionHeading,
    /// A company/date header; closes the open project and opens a new one
    CompanyDateHeader,
    /// A title line followed by bullets; a project closed on the spot
    StandaloneTitle,
    /// A responsibilities heading; qualifies the following lines as bullets
    ResponsibilitiesHeading,
    /// A bullet (or a line under a responsibilities heading) of the open project
    BulletCollection,
}

/// Rules in priority order.
pub const RULE_CHAIN: [Rule; 5] = [
    Rule::SectionHeading,
    Rule::CompanyDateHeader,
    Rule::StandaloneTitle,
    Rule::ResponsibilitiesHeading,
    Rule::BulletCollection,
];

/// Mutable state of one left-to-right scan.
#[derive(Debug, Default)]
pub struct ScanState {
    /// An experience section heading has been seen
    pub in_experience: bool,
    /// A responsibilities heading has been seen in the open project
    pub in_responsibilities: bool,
    /// The project currently collecting bullets
    pub current: Option<ProjectRecord>,
    /// Closed projects in document order
    pub projects: Vec<ProjectRecord>,
}

impl ScanState {
    /// Close the open project, if any.
    pub fn close_current(&mut self) {
        if let Some(project) = self.current.take() {
            log::debug!(
                "Closed project '{}' ({}..={}, {} bullets)",
                project.name,
                project.start_index,
                project.end_index,
                project.bullet_points.len()
            );
            self.projects.push(project);
        }
        self.in_responsibilities = false;
    }

    /// Check if structural rules may open a project.
    fn may_open(&self, options: &DetectorOptions) -> bool {
        !options.require_section || self.in_experience
    }
}

impl Rule {
    /// Check whether this rule fires for the line at `index`.
    pub fn matches(self, options: &DetectorOptions, lines: &[String], index: usize, state: &ScanState) -> bool {
        let text = lines[index].as_str();
        match self {
            Rule::SectionHeading => is_section_heading(options, text),
            Rule::CompanyDateHeader => state.may_open(options) && looks_like_company_date(text),
            Rule::StandaloneTitle => {
                state.current.is_none()
                    && state.may_open(options)
                    && is_title_candidate(options, text)
                    && !following_bullets(options, lines, index).0.is_empty()
            }
            Rule::ResponsibilitiesHeading => is_responsibilities_heading(options, text),
            Rule::BulletCollection => {
                state.current.is_some()
                    && (options.bullet_markers.is_bullet(text) || state.in_responsibilities)
            }
        }
    }
}

/// Check if a line is an experience section heading.
///
/// Matches a configured heading (with or without a trailing colon), a short
/// colon-terminated line containing one, or a phrase of at most four words
/// containing "experience" without sentence punctuation.
pub fn is_section_heading(options: &DetectorOptions, text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    let without_colon = lower.trim_end_matches(':').trim();
    let word_count = lower.split_whitespace().count();

    if options.section_headings.iter().any(|h| h == without_colon) {
        return true;
    }

    if lower.ends_with(':')
        && word_count <= 6
        && options.section_headings.iter().any(|h| lower.contains(h.as_str()))
    {
        return true;
    }

    lower.contains("experience") && word_count <= 4 && !lower.contains(['.', ','])
}

/// Check if a line opens a responsibilities block.
pub fn is_responsibilities_heading(options: &DetectorOptions, text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    options
        .responsibility_prefixes
        .iter()
        .any(|prefix| lower.starts_with(prefix.as_str()))
}

/// Check if a line may serve as a standalone project title.
pub fn is_title_candidate(options: &DetectorOptions, text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    !lower.is_empty()
        && !options.bullet_markers.is_bullet(text)
        && !options.project_exclude_keywords.iter().any(|k| *k == lower)
}

/// Collect the contiguous bullets after `index`, skipping empty lines.
///
/// Returns the bullets with their positions and the position of the first
/// line that ended the run.
pub fn following_bullets(options: &DetectorOptions, lines: &[String], index: usize) -> (Vec<(usize, String)>, usize) {
    let mut bullets = Vec::new();
    let mut j = index + 1;
    while j < lines.len() {
        let text = &lines[j];
        if text.is_empty() {
            j += 1;
            continue;
        }
        if !options.bullet_markers.is_bullet(text) {
            break;
        }
        bullets.push((j, text.clone()));
        j += 1;
    }
    (bullets, j)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_section_heading() {
        let options = DetectorOptions::default();
        assert!(is_section_heading(&options, "Work Experience"));
        assert!(is_section_heading(&options, "EMPLOYMENT:"));
        assert!(is_section_heading(&options, "Career History:"));
        assert!(is_section_heading(&options, "Relevant Experience"));
        assert!(is_section_heading(&options, "Selected work history and roles:"));
        assert!(!is_section_heading(&options, "Over 10 years of experience, mostly backend."));
        assert!(!is_section_heading(&options, "Education"));
    }

    #[test]
    fn test_responsibilities_heading() {
        let options = DetectorOptions::default();
        assert!(is_responsibilities_heading(&options, "Responsibilities:"));
        assert!(is_responsibilities_heading(&options, "Key Responsibilities"));
        assert!(is_responsibilities_heading(&options, "Duties: daily"));
        assert!(!is_responsibilities_heading(&options, "Duties"));
        assert!(!is_responsibilities_heading(&options, "My role"));
    }

    #[test]
    fn test_title_candidate() {
        let options = DetectorOptions::default();
        assert!(is_title_candidate(&options, "Inventory Platform"));
        assert!(!is_title_candidate(&options, "• Inventory Platform"));
        assert!(!is_title_candidate(&options, "Skills"));
        assert!(!is_title_candidate(&options, "responsibilities:"));
        assert!(!is_title_candidate(&options, ""));
    }

    #[test]
    fn test_following_bullets_skips_empty_lines() {
        let options = DetectorOptions::default();
        let lines = lines(&["Title", "• one", "", "- two", "Next title", "• three"]);
        let (bullets, next) = following_bullets(&options, &lines, 0);
        assert_eq!(bullets, vec![(1, "• one".to_string()), (3, "- two".to_string())]);
        assert_eq!(next, 4);
    }

    #[test]
    fn test_standalone_title_needs_closed_project() {
        let options = DetectorOptions::default();
        let lines = lines(&["Inventory Platform", "• Built it"]);
        let mut state = ScanState::default();
        assert!(Rule::StandaloneTitle.matches(&options, &lines, 0, &state));

        state.current = Some(ProjectRecord::new("Acme", 0));
        assert!(!Rule::StandaloneTitle.matches(&options, &lines, 0, &state));
    }

    #[test]
    fn test_bullet_collection_needs_open_project() {
        let options = DetectorOptions::default();
        let lines = lines(&["• Built it", "Plain sentence"]);
        let mut state = ScanState::default();
        assert!(!Rule::BulletCollection.matches(&options, &lines, 0, &state));

        state.current = Some(ProjectRecord::new("Acme", 0));
        assert!(Rule::BulletCollection.matches(&options, &lines, 0, &state));
        assert!(!Rule::BulletCollection.matches(&options, &lines, 1, &state));

        state.in_responsibilities = true;
        assert!(Rule::BulletCollection.matches(&options, &lines, 1, &state));
    }

    #[test]
    fn test_header_gated_by_section_when_required() {
        let options = DetectorOptions::new().within_section();
        let lines = lines(&["Acme | 2020 - 2022"]);
        let mut state = ScanState::default();
        assert!(!Rule::CompanyDateHeader.matches(&options, &lines, 0, &state));

        state.in_experience = true;
        assert!(Rule::CompanyDateHeader.matches(&options, &lines, 0, &state));
    }

    #[test]
    fn test_close_current() {
        let mut state = ScanState {
            current: Some(ProjectRecord::new("Acme", 2)),
            in_responsibilities: true,
            ..Default::default()
        };
        state.close_current();
        assert!(state.current.is_none());
        assert!(!state.in_responsibilities);
        assert_eq!(state.projects.len(), 1);
    }
}
