//! Implementation of the [Fast Non-Dominated Sort Algorithm][1] as used by NSGA-II.
//! Time complexity is `O(K * N^2)`, where `K` is the number of objectives and `N` the number of points.
//!
//! Non-dominated sorting groups points into non-dominated Pareto fronts according to their objectives.
//! In the existence of multiple objectives, a point can happen to be better in one objective while at
//! the same time worse in another objective, and as such none of the two points _dominates_ the other.
//!
//! [1]: https://www.iitk.ac.in/kangal/Deb_NSGA-II.pdf "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II)"

#[cfg(test)]
#[path = "../../tests/unit/algorithms/non_dominated_sort_test.rs"]
mod non_dominated_sort_test;

use crate::algorithms::dominance::{dominance_order, validate_points};
use crate::utils::FrontResult;
use std::cmp::Ordering;

type PointIdx = usize;

/// A Pareto front of a given rank. Use [`Front::next_front`] to peel off the next one.
#[derive(Debug, Clone)]
pub struct Front {
    dominated_points: Vec<Vec<PointIdx>>,
    domination_count: Vec<usize>,
    previous_front: Vec<PointIdx>,
    current_front: Vec<PointIdx>,
    rank: usize,
}

impl Front {
    /// Returns rank of the front, zero is the rank of the non-dominated points.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns indices of the front's points in the original set, in ascending order.
    pub fn indices(&self) -> &[PointIdx] {
        self.current_front.as_slice()
    }

    /// Returns the amount of points in the front.
    pub fn len(&self) -> usize {
        self.current_front.len()
    }

    /// Returns true if front has no points: all points were assigned to previous fronts.
    pub fn is_empty(&self) -> bool {
        self.current_front.is_empty()
    }

    /// Removes the current front from the set and returns the front of the next rank.
    pub fn next_front(self) -> Self {
        let Front { dominated_points, mut domination_count, previous_front, current_front, rank } = self;

        // reuse the previous_front
        let mut next_front = previous_front;
        next_front.clear();

        for &p_i in current_front.iter() {
            for &q_i in dominated_points[p_i].iter() {
                debug_assert!(domination_count[q_i] > 0);

                domination_count[q_i] -= 1;
                if domination_count[q_i] == 0 {
                    // q_i is not dominated by any remaining point, it belongs to the next front.
                    next_front.push(q_i);
                }
            }
        }

        next_front.sort_unstable();

        Self {
            dominated_points,
            domination_count,
            previous_front: current_front,
            current_front: next_front,
            rank: rank + 1,
        }
    }
}

/// Performs a non-dominated sort of `points`. Returns the first Pareto front.
///
/// Fails when points are empty, have different dimensions or contain non-finite values.
pub fn non_dominated_sort<S: AsRef<[f64]>>(points: &[S]) -> FrontResult<Front> {
    validate_points(points)?;

    // the indices of the points that are dominated by this point
    let mut dominated_points: Vec<Vec<PointIdx>> = points.iter().map(|_| Vec::new()).collect();

    // for each point, we keep a domination count, i.e. the number of points that dominate the point
    let mut domination_count: Vec<usize> = points.iter().map(|_| 0).collect();

    let mut current_front: Vec<PointIdx> = Vec::new();

    // initial pass over each combination: O(n*n / 2)
    let mut iter = points.iter().enumerate();
    while let Some((p_i, p)) = iter.next() {
        for (q_i, q) in iter.clone() {
            match dominance_order(p.as_ref(), q.as_ref()) {
                Ordering::Less => {
                    // p dominates q, add `q` to the set of points dominated by `p`
                    dominated_points[p_i].push(q_i);
                    domination_count[q_i] += 1;
                }
                Ordering::Greater => {
                    // q dominates p, add `p` to the set of points dominated by `q`
                    dominated_points[q_i].push(p_i);
                    domination_count[p_i] += 1;
                }
                Ordering::Equal => {}
            }
        }

        // all pairs with p_i are visited at this point
        if domination_count[p_i] == 0 {
            current_front.push(p_i);
        }
    }

    Ok(Front { dominated_points, domination_count, previous_front: Vec::new(), current_front, rank: 0 })
}

/// Splits `points` into Pareto fronts ordered by rank. Each front contains indices of the original
/// points in ascending order, every point belongs to exactly one front.
pub fn get_fronts<S: AsRef<[f64]>>(points: &[S]) -> FrontResult<Vec<Vec<PointIdx>>> {
    let mut front = non_dominated_sort(points)?;
    let mut fronts = Vec::new();

    while !front.is_empty() {
        fronts.push(front.indices().to_vec());
        front = front.next_front();
    }

    Ok(fronts)
}

/// Returns indices of non-dominated points, i.e. the front of rank zero.
pub fn get_pareto_front<S: AsRef<[f64]>>(points: &[S]) -> FrontResult<Vec<PointIdx>> {
    non_dominated_sort(points).map(|front| front.indices().to_vec())
}
