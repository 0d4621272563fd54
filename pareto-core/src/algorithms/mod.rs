//! This module contains the algorithms used to analyze multi-objective point sets.
//!
//! The non-dominated sort is based on the fast non-dominated sort approach of NSGA-II, see
//! "A fast and elitist multiobjective genetic algorithm: NSGA-II", Kalyanmoy Deb et al.
//! DOI: `10.1109/4235.996017`

pub mod deduplication;
pub mod dominance;
pub mod non_dominated_sort;
