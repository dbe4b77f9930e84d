//! Combinations, feasibility, and scoring.
//!
//! These are the pure building blocks shared by both solvers:
//!
//! - [`Combination`]: ordered picks, at most one per component
//! - [`is_valid`]: aggregate mass/cost budget check
//! - [`compute_score`]: sum of the objective metric

mod combination;
mod feasibility;
mod score;

pub use combination::{Combination, Pick};
pub use feasibility::is_valid;
pub use score::compute_score;
