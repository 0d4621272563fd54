//! This crate contains the building blocks to analyze a set of multi-objective points: a dominance
//! relation, the non-dominated sort which splits points into ranked Pareto fronts and a helper to
//! collapse exact duplicates inside a front.
//!
//! All objectives are minimized. A caller which wants to maximize some value (e.g. profit) should
//! negate it before passing points in.
//!
//! # Examples
//!
//! ```
//! use pareto_core::prelude::*;
//!
//! let points = vec![vec![1., 5.], vec![2., 3.], vec![3., 1.], vec![2., 2.]];
//!
//! let fronts = get_fronts(&points).unwrap();
//!
//! assert_eq!(fronts, vec![vec![0, 2, 3], vec![1]]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod prelude;
pub mod utils;

/// A point in objective space: one value per objective, all objectives are minimized.
pub type Point = Vec<f64>;
