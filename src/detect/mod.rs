//! Project detection.
//!
//! Resumes carry no structured markup for experience entries, so projects
//! are found by a single left-to-right scan over the paragraph texts using
//! the ordered heuristics in [`rules`]:
//!
//! 1. experience section headings
//! 2. company/date headers (highest-priority project boundary)
//! 3. standalone project titles followed by bullets
//! 4. responsibilities headings
//! 5. bullet collection into the open project
//!
//! A company/date header may be followed by a role line, which is consumed
//! as part of the header.

mod header;
mod options;
pub mod rules;

pub use header::{looks_like_company_date, parse_header, ParsedHeader};
pub use options::DetectorOptions;
pub use rules::{Rule, ScanState, RULE_CHAIN};

use crate::model::{Document, ProjectRecord};

/// Detects project records in a document.
#[derive(Debug, Clone, Default)]
pub struct ProjectDetector {
    options: DetectorOptions,
}

impl ProjectDetector {
    /// Create a detector with the given options.
    pub fn new(options: DetectorOptions) -> Self {
        Self { options }
    }

    /// Get the detector options.
    pub fn options(&self) -> &DetectorOptions {
        &self.options
    }

    /// Find all projects and their bullet points in a document.
    ///
    /// Returns an empty list when nothing project-like is found.
    pub fn find_projects(&self, doc: &Document) -> Vec<ProjectRecord> {
        let lines: Vec<String> = doc
            .paragraphs()
            .map(|p| p.plain_text().trim().to_string())
            .collect();
        self.find_projects_in_lines(&lines)
    }

    /// Find projects in trimmed paragraph texts.
    ///
    /// Positions in the returned spans index into `lines`.
    pub fn find_projects_in_lines(&self, lines: &[String]) -> Vec<ProjectRecord> {
        let mut state = ScanState::default();
        let mut i = 0;

        while i < lines.len() {
            if lines[i].is_empty() {
                i += 1;
                continue;
            }

            i = match RULE_CHAIN
                .iter()
                .find(|rule| rule.matches(&self.options, lines, i, &state))
            {
                Some(&rule) => self.fire(rule, lines, i, &mut state),
                None => i + 1,
            };
        }

        state.close_current();
        log::debug!("Detected {} projects", state.projects.len());
        state.projects
    }

    /// Run the action of `rule` for the line at `index`; returns the next position.
    fn fire(&self, rule: Rule, lines: &[String], index: usize, state: &mut ScanState) -> usize {
        let text = &lines[index];
        match rule {
            Rule::SectionHeading => {
                state.in_experience = true;
                index + 1
            }
            Rule::CompanyDateHeader => self.open_from_header(lines, index, state),
            Rule::StandaloneTitle => {
                let (bullets, next) = rules::following_bullets(&self.options, lines, index);
                let mut project = ProjectRecord::new(text.clone(), index);
                if let Some((last, _)) = bullets.last() {
                    project.end_index = *last;
                }
                project.bullet_points = bullets.into_iter().map(|(_, b)| b).collect();
                log::debug!("Opened standalone project '{}' at {}", project.name, index);

                state.close_current();
                state.current = Some(project);
                state.close_current();
                next
            }
            Rule::ResponsibilitiesHeading => {
                state.in_responsibilities = true;
                if let Some(project) = state.current.as_mut() {
                    project.end_index = index;
                }
                index + 1
            }
            Rule::BulletCollection => {
                if let Some(project) = state.current.as_mut() {
                    project.bullet_points.push(text.clone());
                    project.end_index = index;
                }
                index + 1
            }
        }
    }

    fn open_from_header(&self, lines: &[String], index: usize, state: &mut ScanState) -> usize {
        state.close_current();

        let header = parse_header(&lines[index]);
        let mut project = ProjectRecord::new(String::new(), index);
        let mut next = index + 1;

        if let Some(role_line) = self.role_line(lines, index) {
            project.role = role_line.to_string();
            project.end_index = index + 1;
            next = index + 2;
        } else {
            project.role = header.role;
        }
        project.company = header.company;
        project.date_range = header.date_range;
        project.name = if !project.company.is_empty() {
            project.company.clone()
        } else if !project.role.is_empty() {
            project.role.clone()
        } else {
            format!("Project {}", state.projects.len() + 1)
        };

        log::debug!("Opened project '{}' at {}", project.name, index);
        state.current = Some(project);
        next
    }

    /// The line right after a header, when it reads like a role.
    fn role_line<'a>(&self, lines: &'a [String], index: usize) -> Option<&'a str> {
        if !self.options.capture_role_line {
            return None;
        }
        let next = lines.get(index + 1)?;
        let is_role = !next.is_empty()
            && !self.options.bullet_markers.is_bullet(next)
            && !looks_like_company_date(next)
            && !rules::is_section_heading(&self.options, next)
            && !rules::is_responsibilities_heading(&self.options, next);
        is_role.then_some(next.as_str())
    }
}
