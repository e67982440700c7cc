//! Point distribution.
//!
//! At most [`MAX_PROJECTS`] projects receive points. Distribution runs in
//! two passes:
//!
//! 1. a saturating first pass hands the first `min(len, P)` points of each
//!    category to projects `0..`, one each;
//! 2. a weighted remainder pass splits the leftover points with weights
//!    `P - i`, the last project absorbing the rounding remainder.
//!
//! Every input point is placed exactly once.

mod normalize;
mod priority;
mod result;

pub use normalize::{normalize, NormalizedCategory};
pub use priority::{project_order, PriorityHint, DEFAULT_COMPANY_MATCH_THRESHOLD};
pub use result::{DistributionResult, ProjectAllocation};

use crate::model::{PointRecord, PointsPayload, ProjectRecord};
use std::collections::HashSet;

/// Maximum number of projects that receive points.
pub const MAX_PROJECTS: usize = 3;

/// Plans which points go to which project.
#[derive(Debug, Clone)]
pub struct PointDistributor {
    priority: Option<PriorityHint>,
    threshold: u8,
}

impl PointDistributor {
    /// Create a distributor without a priority hint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a company priority hint.
    pub fn with_priority(mut self, hint: PriorityHint) -> Self {
        self.priority = Some(hint);
        self
    }

    /// Set the match score a priority hint needs to be honored.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Distribute a points payload over the projects.
    ///
    /// Returns an empty result when there are no projects or no points.
    /// `projects` is never modified.
    pub fn distribute(&self, projects: &[ProjectRecord], payload: &PointsPayload) -> DistributionResult {
        self.distribute_categories(projects, normalize(payload))
    }

    /// Distribute already normalized categories over the projects.
    pub fn distribute_categories(
        &self,
        projects: &[ProjectRecord],
        categories: Vec<NormalizedCategory>,
    ) -> DistributionResult {
        let mut result = DistributionResult {
            categories: categories.iter().map(|c| c.name.clone()).collect(),
            all_points: categories.iter().flat_map(|c| c.points.iter().cloned()).collect(),
            ..Default::default()
        };

        if projects.is_empty() || result.all_points.is_empty() {
            log::warn!(
                "Nothing to distribute ({} projects, {} points)",
                projects.len(),
                result.all_points.len()
            );
            result.unused_points = result.all_points.clone();
            return result;
        }

        let mut order = project_order(projects, self.priority.as_ref(), self.threshold);
        order.truncate(MAX_PROJECTS);

        let allocated = allocate(categories, order.len());
        for (&project_index, points) in order.iter().zip(allocated) {
            let name = projects[project_index].name.clone();
            log::debug!("Assigned {} points to project '{}'", points.len(), name);
            result.distribution.push(ProjectAllocation {
                project_index,
                name,
                points,
            });
        }

        let placed: HashSet<&PointRecord> = result.distribution.iter().flat_map(|a| &a.points).collect();
        result.unused_points = result
            .all_points
            .iter()
            .filter(|p| !placed.contains(p))
            .cloned()
            .collect();

        log::info!(
            "Distributed {} points across {} projects",
            result.total_assigned(),
            result.distribution.len()
        );
        result
    }
}

impl Default for PointDistributor {
    fn default() -> Self {
        Self {
            priority: None,
            threshold: DEFAULT_COMPANY_MATCH_THRESHOLD,
        }
    }
}

/// Allocate category points to `project_count` projects.
fn allocate(categories: Vec<NormalizedCategory>, project_count: usize) -> Vec<Vec<PointRecord>> {
    let mut out = vec![Vec::new(); project_count];
    if project_count == 0 {
        return out;
    }

    let mut remaining = Vec::new();
    for category in categories {
        let mut points = category.points;
        let rest = points.split_off(points.len().min(project_count));
        for (slot, point) in out.iter_mut().zip(points) {
            slot.push(point);
        }
        remaining.extend(rest);
    }

    let total_weight: usize = (1..=project_count).sum();
    let leftover = remaining.len();
    let mut assigned = 0;
    let mut remaining = remaining.into_iter();
    for (i, slot) in out.iter_mut().enumerate() {
        let count = if i + 1 == project_count {
            leftover - assigned
        } else {
            leftover * (project_count - i) / total_weight
        };
        assigned += count;
        slot.extend(remaining.by_ref().take(count));
    }
    out
}
