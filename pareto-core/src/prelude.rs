//! This module reimports commonly used types.

pub use crate::Point;

pub use crate::algorithms::dominance::{dominance_order, dominates, validate_points};
pub use crate::algorithms::deduplication::{deduplicate, deduplicate_sorted};
pub use crate::algorithms::non_dominated_sort::{Front, get_fronts, get_pareto_front, non_dominated_sort};

pub use crate::utils::{FrontError, FrontResult, GenericError, GenericResult};
pub use crate::utils::{compare_floats, compare_points};
