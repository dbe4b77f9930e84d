//! Exhaustive search execution engine.
//!
//! # Algorithm
//!
//! 1. Start an odometer with one cursor per component, all at zero
//! 2. For each cursor position (last component varies fastest):
//!    a. Build the combination the cursors point at
//!    b. Skip it if it breaks a budget
//!    c. Score it; the first feasible combination becomes the best,
//!       later ones replace it only on strict improvement
//! 3. Stop once every cursor has wrapped

use tracing::{debug, info, trace};

use super::config::ExhaustiveConfig;
use crate::error::{Error, Result};
use crate::eval::{compute_score, is_valid, Combination};
use crate::model::{Component, DesignSpace};
use crate::solution::Solution;

/// Result of an exhaustive search.
#[derive(Debug, Clone, PartialEq)]
pub struct ExhaustiveResult<'a> {
    /// Best feasible solution, or `None` when no combination fits the
    /// budgets (or some component has no options).
    pub best: Option<Solution<'a>>,
    /// Combinations enumerated.
    pub candidates_evaluated: u64,
    /// Combinations that satisfied every budget.
    pub feasible_candidates: u64,
}

impl ExhaustiveResult<'_> {
    /// Whether a feasible combination was found.
    pub fn is_feasible(&self) -> bool {
        self.best.is_some()
    }

    /// Score of the best solution, if any.
    pub fn best_score(&self) -> Option<f64> {
        self.best.as_ref().map(|s| s.score)
    }
}

/// Exhaustive search runner.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Enumerates every combination of `space` and returns the best
    /// feasible one.
    ///
    /// The space is assumed valid (see [`DesignSpace::validate`]).
    ///
    /// # Errors
    ///
    /// [`Error::SearchSpaceTooLarge`] when `config.combination_limit` is set
    /// and the space exceeds it. Nothing is enumerated in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_select::exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
    /// use u_select::model::{Component, ComponentOption, Constraints, DesignSpace, Objective};
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
    ///     .with_constraints(Constraints::default().with_max_mass(3.0));
    ///
    /// let result = ExhaustiveRunner::run(&space, &ExhaustiveConfig::default()).unwrap();
    /// assert_eq!(result.best_score(), Some(12.0));
    /// ```
    pub fn run<'a>(
        space: &'a DesignSpace,
        config: &ExhaustiveConfig,
    ) -> Result<ExhaustiveResult<'a>> {
        let count = space.combination_count();
        if let Some(limit) = config.combination_limit {
            if count > limit {
                return Err(Error::SearchSpaceTooLarge { count, limit });
            }
        }

        let components = &space.components;
        let metric = space.objective.metric.as_str();
        let direction = space.objective.direction;

        debug!(
            components = components.len(),
            combinations = %count,
            %metric,
            %direction,
            "exhaustive search started"
        );

        if count == 0 {
            debug!("a component has no options; search space is empty");
            return Ok(ExhaustiveResult {
                best: None,
                candidates_evaluated: 0,
                feasible_candidates: 0,
            });
        }

        let mut cursor = vec![0usize; components.len()];
        let mut candidate = Combination::with_capacity(components.len());
        let mut best: Option<(f64, Combination<'a>)> = None;
        let mut evaluated = 0u64;
        let mut feasible = 0u64;

        loop {
            fill(&mut candidate, components, &cursor);
            evaluated += 1;

            if is_valid(&candidate, &space.constraints) {
                feasible += 1;
                let score = compute_score(&candidate, metric);
                let replace = match &best {
                    None => true,
                    Some((incumbent, _)) => direction.improves(score, *incumbent),
                };
                if replace {
                    trace!(score, candidate = evaluated, "new best");
                    best = Some((score, candidate.clone()));
                }
            }

            if !advance(&mut cursor, components) {
                break;
            }
        }

        let best = best.map(|(score, combination)| Solution::complete(score, combination));

        match &best {
            Some(sol) => info!(
                score = sol.score,
                evaluated, feasible, "exhaustive search finished"
            ),
            None => info!(evaluated, "exhaustive search found no feasible combination"),
        }

        Ok(ExhaustiveResult {
            best,
            candidates_evaluated: evaluated,
            feasible_candidates: feasible,
        })
    }
}

/// Rebuilds `combination` from the cursor positions.
fn fill<'a>(combination: &mut Combination<'a>, components: &'a [Component], cursor: &[usize]) {
    combination.clear();
    for (component, &i) in components.iter().zip(cursor) {
        combination.push(&component.name, &component.options[i]);
    }
}

/// Steps the odometer, last component fastest. Returns `false` once every
/// position has been visited.
fn advance(cursor: &mut [usize], components: &[Component]) -> bool {
    for (pos, component) in cursor.iter_mut().zip(components).rev() {
        *pos += 1;
        if *pos < component.options.len() {
            return true;
        }
        *pos = 0;
    }
    false
}
