//! Greedy construction engine.
//!
//! # Algorithm
//!
//! 1. Start with zero used mass/cost and an empty combination
//! 2. For each component, in declaration order:
//!    a. Stable-sort its options best-first by the objective metric
//!    b. Take the first option whose mass and cost still fit
//!    c. If none fits, leave the component empty
//! 3. Score whatever was assembled
//!
//! Each component is handled by [`step`], a pure function from state to
//! state; the runner is a fold of `step` over the components.

use tracing::{debug, info, warn};

use super::types::{GreedyState, SlotDecision};
use crate::eval::compute_score;
use crate::model::{Component, ComponentOption, Constraints, DesignSpace, Objective};
use crate::solution::{Completeness, Solution};

/// Result of a greedy run.
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyResult<'a> {
    /// The assembled (possibly partial) solution.
    pub solution: Solution<'a>,
    /// Per-component decisions in processing order.
    pub decisions: Vec<SlotDecision<'a>>,
}

impl GreedyResult<'_> {
    /// Whether every component received an option.
    pub fn is_complete(&self) -> bool {
        self.solution.is_complete()
    }
}

/// Options of `component` ordered best-first under `objective`.
///
/// The sort is stable: options with equal metric values keep their
/// declaration order.
pub fn rank_options<'a>(component: &'a Component, objective: &Objective) -> Vec<&'a ComponentOption> {
    let metric = objective.metric.as_str();
    let mut ranked: Vec<&ComponentOption> = component.options.iter().collect();
    ranked.sort_by(|a, b| objective.direction.rank(a.metric(metric), b.metric(metric)));
    ranked
}

/// Processes one component.
///
/// Takes the best-ranked option that keeps the running totals within
/// `constraints`, or records the component as unfilled.
pub fn step<'a>(
    mut state: GreedyState<'a>,
    component: &'a Component,
    constraints: &Constraints,
    objective: &Objective,
) -> GreedyState<'a> {
    let ranked = rank_options(component, objective);
    let fit = ranked
        .iter()
        .position(|option| constraints.admits(state.used.add(option)));

    let decision = match fit {
        Some(idx) => {
            let option = ranked[idx];
            if state.combination.push(&component.name, option) {
                state.used = state.used.add(option);
            }
            SlotDecision {
                component: &component.name,
                chosen: Some(option),
                rejected: idx,
            }
        }
        None => {
            debug!(component = %component.name, options = ranked.len(), "no option fits the remaining budget");
            SlotDecision {
                component: &component.name,
                chosen: None,
                rejected: ranked.len(),
            }
        }
    };
    state.decisions.push(decision);
    state
}

/// Greedy runner.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Builds one combination greedily.
    ///
    /// Always returns a solution; check
    /// [`Solution::is_complete`] before treating it as a full design.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_select::greedy::GreedyRunner;
    /// use u_select::model::{Component, ComponentOption, Constraints, DesignSpace, Objective};
    ///
    /// let space = DesignSpace::new(Objective::maximize("val"))
    ///     .with_component(
    ///         Component::new("a")
    ///             .with_option(ComponentOption::new("a1", 1.0, 1.0).with_metric("val", 5.0))
    ///             .with_option(ComponentOption::new("a2", 2.0, 1.0).with_metric("val", 9.0)),
    ///     )
    ///     .with_constraints(Constraints::default().with_max_mass(1.5));
    ///
    /// let result = GreedyRunner::run(&space);
    /// assert_eq!(result.solution.score, 5.0);
    /// assert!(result.is_complete());
    /// ```
    pub fn run(space: &DesignSpace) -> GreedyResult<'_> {
        let state = space
            .components
            .iter()
            .fold(GreedyState::new(), |state, component| {
                step(state, component, &space.constraints, &space.objective)
            });

        let score = compute_score(&state.combination, &space.objective.metric);
        let unfilled = state.unfilled();
        let completeness = if unfilled.is_empty() {
            Completeness::Complete
        } else {
            warn!(
                unfilled = ?unfilled,
                "greedy result is partial: some components could not be filled"
            );
            Completeness::Partial { unfilled }
        };

        info!(
            score,
            filled = state.combination.len(),
            components = space.components.len(),
            "greedy construction finished"
        );

        GreedyResult {
            solution: Solution {
                score,
                combination: state.combination,
                completeness,
            },
            decisions: state.decisions,
        }
    }
}
