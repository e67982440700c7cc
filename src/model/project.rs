//! Detected project (experience entry) records.

use serde::{Deserialize, Serialize};

/// One detected experience entry.
///
/// `start_index..=end_index` is a paragraph span of the document the record
/// was detected in. Spans are positional, so they must be shifted whenever
/// paragraphs are inserted in front of them (see [`ProjectRecord::shift_after`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Display name; never empty
    pub name: String,

    /// First paragraph of the span
    pub start_index: usize,

    /// Last paragraph of the span (inclusive)
    pub end_index: usize,

    /// Role or job title, empty when unknown
    #[serde(default)]
    pub role: String,

    /// Company, empty when unknown
    #[serde(default)]
    pub company: String,

    /// Free-text date range, empty when unknown
    #[serde(default)]
    pub date_range: String,

    /// Existing bullet texts inside the span
    #[serde(default)]
    pub bullet_points: Vec<String>,
}

impl ProjectRecord {
    /// Create a record covering a single paragraph.
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            start_index: index,
            end_index: index,
            role: String::new(),
            company: String::new(),
            date_range: String::new(),
            bullet_points: Vec::new(),
        }
    }

    /// Number of paragraphs in the span.
    pub fn span_len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index) + 1
    }

    /// Check if a paragraph position lies inside the span.
    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..=self.end_index).contains(&index)
    }

    /// Account for `count` paragraphs inserted directly after position `at`.
    ///
    /// Bounds greater than `at` move up by `count`; a span that contains
    /// `at` grows at its end.
    pub fn shift_after(&mut self, at: usize, count: usize) {
        if self.start_index > at {
            self.start_index += count;
        }
        if self.end_index >= at {
            self.end_index += count;
        }
    }

    /// Check whether the company or the name contains `needle`, ignoring case.
    pub(crate) fn matches_company(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.company.to_lowercase().contains(&needle) || self.name.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_helpers() {
        let mut p = ProjectRecord::new("Acme", 4);
        p.end_index = 7;
        assert_eq!(p.span_len(), 4);
        assert!(p.contains(4));
        assert!(p.contains(7));
        assert!(!p.contains(8));
    }

    #[test]
    fn test_shift_after_inside_span_grows_end() {
        let mut p = ProjectRecord::new("Acme", 2);
        p.end_index = 5;
        p.shift_after(5, 3);
        assert_eq!((p.start_index, p.end_index), (2, 8));
    }

    #[test]
    fn test_shift_after_before_span_moves_both() {
        let mut p = ProjectRecord::new("Acme", 10);
        p.end_index = 12;
        p.shift_after(6, 2);
        assert_eq!((p.start_index, p.end_index), (12, 14));
    }

    #[test]
    fn test_shift_after_behind_span_is_noop() {
        let mut p = ProjectRecord::new("Acme", 1);
        p.end_index = 3;
        p.shift_after(9, 4);
        assert_eq!((p.start_index, p.end_index), (1, 3));
    }

    #[test]
    fn test_matches_company() {
        let mut p = ProjectRecord::new("Backend Platform", 0);
        p.company = "Globex Corporation".to_string();
        assert!(p.matches_company("globex"));
        assert!(p.matches_company("Platform"));
        assert!(!p.matches_company("Initech"));
        assert!(!p.matches_company("  "));
    }
}
