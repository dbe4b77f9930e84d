//! Exhaustive search.
//!
//! Enumerates the Cartesian product of every component's options,
//! discards combinations that break a budget, and keeps the best-scoring
//! feasible one. The result is the true optimum, at a cost exponential in
//! the number of components.
//!
//! Ties are resolved in favor of the combination enumerated first, so
//! repeated runs on the same space return the same combination.

mod config;
mod runner;

pub use config::ExhaustiveConfig;
pub use runner::{ExhaustiveResult, ExhaustiveRunner};
