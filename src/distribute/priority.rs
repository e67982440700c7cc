//! Company priority hint.

use crate::model::ProjectRecord;
use serde::{Deserialize, Serialize};

/// Default company match threshold, in percent.
pub const DEFAULT_COMPANY_MATCH_THRESHOLD: u8 = 70;

/// Priority company names supplied by an external company matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityHint {
    /// Company names in priority order
    pub companies: Vec<String>,

    /// Match score reported by the matcher, in percent
    pub match_score: u8,
}

impl PriorityHint {
    /// Create a priority hint.
    pub fn new<S: Into<String>>(companies: impl IntoIterator<Item = S>, match_score: u8) -> Self {
        Self {
            companies: companies.into_iter().map(Into::into).collect(),
            match_score,
        }
    }

    /// Check if the hint should be honored under `threshold`.
    pub fn is_honored(&self, threshold: u8) -> bool {
        !self.companies.is_empty() && self.match_score >= threshold
    }
}

/// Project indices in distribution order.
///
/// Without an honored hint this is document order. With one, projects
/// matching a priority company come first in priority order, followed by
/// the rest in document order.
pub fn project_order(projects: &[ProjectRecord], hint: Option<&PriorityHint>, threshold: u8) -> Vec<usize> {
    let Some(hint) = hint.filter(|h| h.is_honored(threshold)) else {
        return (0..projects.len()).collect();
    };

    let mut order = Vec::with_capacity(projects.len());
    for company in &hint.companies {
        for (i, project) in projects.iter().enumerate() {
            if !order.contains(&i) && project.matches_company(company) {
                order.push(i);
            }
        }
    }
    log::debug!("Priority companies matched projects {:?}", order);

    for i in 0..projects.len() {
        if !order.contains(&i) {
            order.push(i);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Vec<ProjectRecord> {
        let mut acme = ProjectRecord::new("Acme", 0);
        acme.company = "Acme Corp".to_string();
        let globex = ProjectRecord::new("Globex", 3);
        let mut initech = ProjectRecord::new("Backend Engineer", 6);
        initech.company = "Initech".to_string();
        vec![acme, globex, initech]
    }

    #[test]
    fn test_no_hint_keeps_document_order() {
        assert_eq!(project_order(&projects(), None, 70), vec![0, 1, 2]);
    }

    #[test]
    fn test_honored_hint_moves_matches_first() {
        let hint = PriorityHint::new(["initech", "globex"], 85);
        assert_eq!(project_order(&projects(), Some(&hint), 70), vec![2, 1, 0]);
    }

    #[test]
    fn test_hint_below_threshold_is_ignored() {
        let hint = PriorityHint::new(["initech"], 69);
        assert!(!hint.is_honored(DEFAULT_COMPANY_MATCH_THRESHOLD));
        assert_eq!(project_order(&projects(), Some(&hint), 70), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_hint_is_not_honored() {
        assert!(!PriorityHint::new(Vec::<String>::new(), 100).is_honored(0));
    }
}
