//! Project detection options.

use crate::markers::MarkerSet;

/// Options for project detection.
///
/// Every keyword list is matched case-insensitively.
#[derive(Debug, Clone)]
pub struct DetectorOptions {
    /// Experience section headings (e.g., "work experience")
    pub section_headings: Vec<String>,

    /// Lines that never become a standalone project title
    pub project_exclude_keywords: Vec<String>,

    /// Prefixes of a responsibilities heading
    pub responsibility_prefixes: Vec<String>,

    /// Markers that make a line a bullet point
    pub bullet_markers: MarkerSet,

    /// Take the line right after a company/date header as the role
    pub capture_role_line: bool,

    /// Only open projects after an experience section heading was seen
    pub require_section: bool,
}

impl DetectorOptions {
    /// Create new detector options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the experience section headings.
    pub fn with_section_headings<S: Into<String>>(mut self, headings: impl IntoIterator<Item = S>) -> Self {
        self.section_headings = lowercase_all(headings);
        self
    }

    /// Set the standalone-title exclusions.
    pub fn with_exclude_keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        self.project_exclude_keywords = lowercase_all(keywords);
        self
    }

    /// Set the responsibilities heading prefixes.
    pub fn with_responsibility_prefixes<S: Into<String>>(
        mut self,
        prefixes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.responsibility_prefixes = lowercase_all(prefixes);
        self
    }

    /// Set the bullet markers.
    pub fn with_bullet_markers(mut self, markers: MarkerSet) -> Self {
        self.bullet_markers = markers;
        self
    }

    /// Enable or disable role-line capture after a header.
    pub fn with_role_line(mut self, capture: bool) -> Self {
        self.capture_role_line = capture;
        self
    }

    /// Only detect projects inside an experience section.
    pub fn within_section(mut self) -> Self {
        self.require_section = true;
        self
    }
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            section_headings: lowercase_all([
                "experience",
                "professional experience",
                "work experience",
                "employment",
                "employment history",
                "career history",
                "work history",
            ]),
            project_exclude_keywords: lowercase_all([
                "summary",
                "skills",
                "education",
                "achievements",
                "responsibilities:",
                "contact",
                "professional",
            ]),
            responsibility_prefixes: lowercase_all([
                "responsibilities",
                "key responsibilities",
                "duties:",
                "tasks:",
                "role:",
                "achievements:",
            ]),
            bullet_markers: MarkerSet::detector(),
            capture_role_line: true,
            require_section: false,
        }
    }
}

fn lowercase_all<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
    items.into_iter().map(|s| s.into().to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detector_options_builder() {
        let options = DetectorOptions::new()
            .with_section_headings(["Berufserfahrung"])
            .with_role_line(false)
            .within_section();

        assert_eq!(options.section_headings, vec!["berufserfahrung"]);
        assert!(!options.capture_role_line);
        assert!(options.require_section);
    }

    #[test]
    fn test_default_options() {
        let options = DetectorOptions::default();
        assert!(options.section_headings.iter().any(|h| h == "work experience"));
        assert!(options.capture_role_line);
        assert!(!options.require_section);
    }
}
