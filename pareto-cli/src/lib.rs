//! A library part of the command line interface which analyzes Pareto fronts of travelling thief
//! problem results.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use pareto_core as core;
pub use pareto_results as results;

pub mod extensions;
