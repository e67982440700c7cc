//! Points payload normalization.
//!
//! A flat `(points, categories)` payload is split evenly across the
//! categories in order; the first `len % categories` categories take one
//! extra point. Categorized payloads are taken as they are, with duplicate
//! category names merged.

use crate::model::{PointRecord, PointsPayload};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Points of one category after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedCategory {
    /// Category name
    pub name: String,

    /// Points in supply order
    pub points: Vec<PointRecord>,
}

/// Normalize a payload into ordered categories of point records.
///
/// Point texts are NFC-normalized and trimmed. Categories that end up
/// without points are dropped.
pub fn normalize(payload: &PointsPayload) -> Vec<NormalizedCategory> {
    let categories = match payload {
        PointsPayload::Flat { points, categories } => split_flat(points, categories),
        PointsPayload::Categorized(groups) => {
            let mut out: Vec<NormalizedCategory> = Vec::new();
            let mut index = 0;
            for group in groups {
                for text in &group.points {
                    let point = PointRecord::new(clean_point(text), group.category.clone(), index);
                    push_point(&mut out, &group.category, point);
                    index += 1;
                }
            }
            out
        }
    };

    let categories: Vec<_> = categories.into_iter().filter(|c| !c.points.is_empty()).collect();
    log::debug!(
        "Normalized categories: {:?}",
        categories
            .iter()
            .map(|c| (c.name.as_str(), c.points.len()))
            .collect::<Vec<_>>()
    );
    categories
}

fn split_flat(points: &[String], categories: &[String]) -> Vec<NormalizedCategory> {
    let mut out: Vec<NormalizedCategory> = Vec::new();
    if points.is_empty() || categories.is_empty() {
        return out;
    }

    let base = points.len() / categories.len();
    let remainder = points.len() % categories.len();
    let mut texts = points.iter().enumerate();

    for (i, category) in categories.iter().enumerate() {
        let count = base + usize::from(i < remainder);
        for (index, text) in texts.by_ref().take(count) {
            push_point(&mut out, category, PointRecord::new(clean_point(text), category.clone(), index));
        }
    }

    if out.iter().all(|c| c.points.is_empty()) {
        log::warn!("Even split produced no points, matching points to categories by name");
        out = match_by_name(points, categories);
    }
    out
}

/// Assign each point to the first category whose name occurs in its text.
fn match_by_name(points: &[String], categories: &[String]) -> Vec<NormalizedCategory> {
    let mut out = Vec::new();
    for (index, text) in points.iter().enumerate() {
        let lower = text.to_lowercase();
        if let Some(category) = categories.iter().find(|c| lower.contains(&c.to_lowercase())) {
            push_point(&mut out, category, PointRecord::new(clean_point(text), category.clone(), index));
        }
    }
    out
}

fn push_point(out: &mut Vec<NormalizedCategory>, category: &str, point: PointRecord) {
    match out.iter_mut().find(|c| c.name == category) {
        Some(existing) => existing.points.push(point),
        None => out.push(NormalizedCategory {
            name: category.to_string(),
            points: vec![point],
        }),
    }
}

fn clean_point(text: &str) -> String {
    text.nfc().collect::<String>().trim().to_string()
}
