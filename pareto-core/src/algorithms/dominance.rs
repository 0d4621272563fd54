//! Specifies Pareto dominance relation between two points.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/dominance_test.rs"]
mod dominance_test;

use crate::utils::{FrontError, FrontResult, compare_floats};
use std::cmp::Ordering;

/// Calculates dominance order of two points using all their objectives (minimization).
///
/// Returns:
/// - `Ordering::Less` if `a` dominates `b`: `a` is no worse in every objective and strictly better in one
/// - `Ordering::Greater` if `b` dominates `a`
/// - `Ordering::Equal` if neither dominates the other, which includes points with equal objective values
///
/// Both points are expected to have the same dimension and finite values, see [`validate_points`].
pub fn dominance_order(a: &[f64], b: &[f64]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());

    let mut less_cnt = 0;
    let mut greater_cnt = 0;

    for (&a, &b) in a.iter().zip(b.iter()) {
        match compare_floats(a, b) {
            Ordering::Less => less_cnt += 1,
            Ordering::Greater => greater_cnt += 1,
            Ordering::Equal => {}
        }

        // incomparable, no need to check the rest of objectives
        if less_cnt > 0 && greater_cnt > 0 {
            return Ordering::Equal;
        }
    }

    match (less_cnt > 0, greater_cnt > 0) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Returns true if `a` dominates `b`.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    dominance_order(a, b) == Ordering::Less
}

/// Checks that points can be ranked: the set is not empty, all points have the same non-zero
/// dimension and every objective value is finite. Returns the dimension on success.
pub fn validate_points<S: AsRef<[f64]>>(points: &[S]) -> FrontResult<usize> {
    let dimension = points
        .first()
        .map(|point| point.as_ref().len())
        .ok_or_else(|| FrontError::EmptyInput("no points to rank".to_string()))?;

    if dimension == 0 {
        return Err(FrontError::InvalidInput("points should have at least one objective".to_string()));
    }

    points.iter().enumerate().try_for_each(|(point_idx, point)| {
        let point = point.as_ref();

        if point.len() != dimension {
            return Err(FrontError::InvalidInput(format!(
                "point #{point_idx} has {} objectives, expected {dimension}",
                point.len()
            )));
        }

        match point.iter().enumerate().find(|(_, value)| !value.is_finite()) {
            Some((objective_idx, value)) => Err(FrontError::NumericError(format!(
                "point #{point_idx} has non-finite value '{value}' in objective #{objective_idx}"
            ))),
            None => Ok(()),
        }
    })?;

    Ok(dimension)
}
