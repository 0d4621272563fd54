#[cfg(test)]
#[path = "../../tests/unit/ttp/solutions_test.rs"]
mod solutions_test;

use pareto_core::Point;

/// Keeps solutions read from results as points to minimize: `(travel_time, negative_profit)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solutions {
    points: Vec<Point>,
}

impl Solutions {
    /// Creates solutions from `(travel_time, profit)` pairs. Profit is negated, so both
    /// objectives are minimized.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self { points: pairs.into_iter().map(|(travel_time, profit)| vec![travel_time, -profit]).collect() }
    }

    /// Returns all solutions in input order.
    pub fn points(&self) -> &[Point] {
        self.points.as_slice()
    }

    /// Returns solutions selected by their indices.
    pub fn select(&self, indices: &[usize]) -> Vec<Point> {
        indices.iter().filter_map(|&idx| self.points.get(idx)).cloned().collect()
    }

    /// Returns travel times in input order.
    pub fn travel_times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point[0])
    }

    /// Returns negated profits in input order.
    pub fn negative_profits(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point[1])
    }

    /// Returns amount of solutions.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no solutions.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
