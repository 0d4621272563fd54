//! Collapses points with exactly the same objective values.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/deduplication_test.rs"]
mod deduplication_test;

use crate::Point;
use crate::utils::compare_points;
use rustc_hash::FxHashSet;

/// Returns distinct points keeping the first occurrence of each of them.
///
/// Points are equal when all their objective values are numerically equal, no tolerance is applied.
/// Positive and negative zero are considered the same value.
pub fn deduplicate<S: AsRef<[f64]>>(points: &[S]) -> Vec<Point> {
    let mut seen = FxHashSet::default();

    points
        .iter()
        .map(|point| point.as_ref())
        .filter(|point| seen.insert(point.iter().map(|&value| get_value_key(value)).collect::<Vec<_>>()))
        .map(|point| point.to_vec())
        .collect()
}

/// Returns distinct points sorted in lexicographic order of their objectives.
pub fn deduplicate_sorted<S: AsRef<[f64]>>(points: &[S]) -> Vec<Point> {
    let mut points = deduplicate(points);
    points.sort_by(|a, b| compare_points(a, b));

    points
}

fn get_value_key(value: f64) -> u64 {
    // -0. == 0. but their bits differ
    if value == 0. { 0 } else { value.to_bits() }
}
