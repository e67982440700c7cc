//! Distribution results.

use crate::model::PointRecord;
use serde::{Deserialize, Serialize};

/// Points planned for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAllocation {
    /// Position of the project in the detected project list
    pub project_index: usize,

    /// Project display name
    pub name: String,

    /// Points to insert, in insertion order
    pub points: Vec<PointRecord>,
}

/// Output of the point distributor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionResult {
    /// One allocation per selected project, in distribution order
    pub distribution: Vec<ProjectAllocation>,

    /// Every normalized input point
    pub all_points: Vec<PointRecord>,

    /// Input points that were not placed; empty after a normal run
    pub unused_points: Vec<PointRecord>,

    /// Category names in supply order
    pub categories: Vec<String>,
}

impl DistributionResult {
    /// Get the first allocation with the given project name.
    pub fn get(&self, name: &str) -> Option<&ProjectAllocation> {
        self.distribution.iter().find(|a| a.name == name)
    }

    /// Get the allocation of the project at `project_index`.
    pub fn for_project(&self, project_index: usize) -> Option<&ProjectAllocation> {
        self.distribution.iter().find(|a| a.project_index == project_index)
    }

    /// Total number of placed points.
    pub fn total_assigned(&self) -> usize {
        self.distribution.iter().map(|a| a.points.len()).sum()
    }

    /// Check if nothing was distributed.
    pub fn is_empty(&self) -> bool {
        self.distribution.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_helpers() {
        let result = DistributionResult {
            distribution: vec![
                ProjectAllocation {
                    project_index: 2,
                    name: "Acme".to_string(),
                    points: vec![PointRecord::new("a", "Rust", 0)],
                },
                ProjectAllocation {
                    project_index: 0,
                    name: "Acme".to_string(),
                    points: vec![PointRecord::new("b", "Rust", 1), PointRecord::new("c", "Go", 2)],
                },
            ],
            ..Default::default()
        };

        assert_eq!(result.get("Acme").map(|a| a.project_index), Some(2));
        assert_eq!(result.for_project(0).map(|a| a.points.len()), Some(2));
        assert!(result.for_project(1).is_none());
        assert_eq!(result.total_assigned(), 3);
        assert!(!result.is_empty());
        assert!(DistributionResult::default().is_empty());
    }
}
