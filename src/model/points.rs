//! Tech-stack point payloads.

use serde::{Deserialize, Serialize};

/// A single point to insert, tagged with the category it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointRecord {
    /// Point text
    pub text: String,

    /// Category (tech stack) name
    pub category: String,

    /// Position in the caller's flat point list
    pub original_index: usize,
}

impl PointRecord {
    /// Create a new point record.
    pub fn new(text: impl Into<String>, category: impl Into<String>, original_index: usize) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            original_index,
        }
    }
}

/// Ordered points of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPoints {
    /// Category name
    pub category: String,

    /// Points in the order they were supplied
    pub points: Vec<String>,
}

impl CategoryPoints {
    /// Create a category with its points.
    pub fn new<S: Into<String>>(category: impl Into<String>, points: impl IntoIterator<Item = S>) -> Self {
        Self {
            category: category.into(),
            points: points.into_iter().map(Into::into).collect(),
        }
    }
}

/// Points handed over by the external text parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointsPayload {
    /// A flat point list plus the category names it was parsed from
    Flat {
        /// Points in parse order
        points: Vec<String>,
        /// Category names in parse order
        categories: Vec<String>,
    },

    /// Points already grouped by category
    Categorized(Vec<CategoryPoints>),
}

impl PointsPayload {
    /// Create a flat payload.
    pub fn flat<P, C>(points: impl IntoIterator<Item = P>, categories: impl IntoIterator<Item = C>) -> Self
    where
        P: Into<String>,
        C: Into<String>,
    {
        PointsPayload::Flat {
            points: points.into_iter().map(Into::into).collect(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Total number of points in the payload.
    pub fn point_count(&self) -> usize {
        match self {
            PointsPayload::Flat { points, .. } => points.len(),
            PointsPayload::Categorized(groups) => groups.iter().map(|g| g.points.len()).sum(),
        }
    }

    /// Category names in the order they were supplied.
    pub fn category_names(&self) -> Vec<String> {
        match self {
            PointsPayload::Flat { categories, .. } => categories.clone(),
            PointsPayload::Categorized(groups) => groups.iter().map(|g| g.category.clone()).collect(),
        }
    }

    /// Check if the payload carries no points.
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

impl From<(Vec<String>, Vec<String>)> for PointsPayload {
    fn from((points, categories): (Vec<String>, Vec<String>)) -> Self {
        PointsPayload::Flat { points, categories }
    }
}

impl From<Vec<CategoryPoints>> for PointsPayload {
    fn from(groups: Vec<CategoryPoints>) -> Self {
        PointsPayload::Categorized(groups)
    }
}
