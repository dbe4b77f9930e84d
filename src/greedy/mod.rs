//! Greedy construction.
//!
//! Fills components one at a time in declaration order. For each
//! component the options are ranked by the objective metric and the
//! best-ranked option that still fits the remaining budget is taken.
//! Choices are never revisited.
//!
//! The result is a heuristic: it is not guaranteed to be optimal, and a
//! component whose every option overruns the remaining budget is left
//! empty. Such results are marked
//! [`Completeness::Partial`](crate::Completeness::Partial).

mod runner;
mod types;

pub use runner::{rank_options, step, GreedyResult, GreedyRunner};
pub use types::{GreedyState, SlotDecision};
