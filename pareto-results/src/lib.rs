//! Results crate contains logic to read files with solutions of a bi-objective travelling thief
//! problem and to write their Pareto front as text.
//!
//!
//! # Supported formats
//!
//! - **ttp**: whitespace separated `travel_time profit` pairs followed by a single trailing value
//!   (e.g. a random seed) which is not a part of the data.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use pareto_core as core;

pub mod ttp;
