//! Contains command implementations.

pub mod analyze;
