//! Optimizer entry point.

use tracing::debug;

use super::config::{OptimizerConfig, Strategy};
use crate::error::Result;
use crate::exhaustive::{ExhaustiveResult, ExhaustiveRunner};
use crate::greedy::{GreedyResult, GreedyRunner};
use crate::model::DesignSpace;
use crate::solution::Solution;

/// What a strategy returned, unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'a> {
    Exhaustive(ExhaustiveResult<'a>),
    Greedy(GreedyResult<'a>),
}

impl<'a> Outcome<'a> {
    /// Strategy that produced this outcome.
    pub fn strategy(&self) -> Strategy {
        match self {
            Outcome::Exhaustive(_) => Strategy::Exhaustive,
            Outcome::Greedy(_) => Strategy::Greedy,
        }
    }

    /// The best solution, or `None` when exhaustive search found nothing
    /// feasible. Greedy always yields a solution, possibly partial.
    pub fn best(&self) -> Option<&Solution<'a>> {
        match self {
            Outcome::Exhaustive(r) => r.best.as_ref(),
            Outcome::Greedy(r) => Some(&r.solution),
        }
    }

    /// Consumes the outcome, keeping only the best solution.
    pub fn into_best(self) -> Option<Solution<'a>> {
        match self {
            Outcome::Exhaustive(r) => r.best,
            Outcome::Greedy(r) => Some(r.solution),
        }
    }

    /// Score of the best solution.
    pub fn score(&self) -> Option<f64> {
        self.best().map(|s| s.score)
    }
}

/// Runs a configured strategy against a design space.
///
/// # Examples
///
/// ```
/// use u_select::model::{Component, ComponentOption, Constraints, DesignSpace, Objective};
/// use u_select::{Optimizer, OptimizerConfig, Strategy};
///
/// let space = DesignSpace::new(Objective::maximize("val"))
///     .with_component(
///         Component::new("a")
///             .with_option(ComponentOption::new("a1", 1.0, 1.0).with_metric("val", 5.0))
///             .with_option(ComponentOption::new("a2", 2.0, 1.0).with_metric("val", 9.0)),
///     )
///     .with_component(
///         Component::new("b")
///             .with_option(ComponentOption::new("b1", 1.0, 1.0).with_metric("val", 3.0)),
///     )
///     .with_constraints(Constraints::default().with_max_mass(2.0));
///
/// let optimizer = Optimizer::new(OptimizerConfig::new(Strategy::Exhaustive));
/// let outcome = optimizer.optimize(&space).unwrap();
/// assert_eq!(outcome.score(), Some(8.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Creates an optimizer.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Validates `space` and runs the configured strategy.
    ///
    /// # Errors
    ///
    /// Validation errors from [`DesignSpace::validate`], or
    /// [`Error::SearchSpaceTooLarge`](crate::Error::SearchSpaceTooLarge)
    /// from the exhaustive combination limit. No search runs when an
    /// error is returned.
    pub fn optimize<'a>(&self, space: &'a DesignSpace) -> Result<Outcome<'a>> {
        space.validate()?;
        debug!(strategy = %self.config.strategy, "optimizing");
        match self.config.strategy {
            Strategy::Exhaustive => {
                ExhaustiveRunner::run(space, &self.config.exhaustive).map(Outcome::Exhaustive)
            }
            Strategy::Greedy => Ok(Outcome::Greedy(GreedyRunner::run(space))),
        }
    }
}

/// Validates `space` and runs `strategy` with default settings.
pub fn optimize(space: &DesignSpace, strategy: Strategy) -> Result<Outcome<'_>> {
    Optimizer::new(OptimizerConfig::new(strategy)).optimize(space)
}
