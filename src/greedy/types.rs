//! Greedy accumulator types.

use crate::eval::Combination;
use crate::model::{ComponentOption, Totals};

/// What the greedy step decided for one component.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotDecision<'a> {
    /// Component name.
    pub component: &'a str,
    /// Option taken, or `None` if nothing fit.
    pub chosen: Option<&'a ComponentOption>,
    /// Better-ranked options skipped because they overran the budget.
    pub rejected: usize,
}

/// Running state threaded through the greedy fold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GreedyState<'a> {
    /// Mass and cost already committed.
    pub used: Totals,
    /// Options taken so far, in component order.
    pub combination: Combination<'a>,
    /// One entry per processed component.
    pub decisions: Vec<SlotDecision<'a>>,
}

impl<'a> GreedyState<'a> {
    /// Empty state: nothing used, nothing chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Components that received no option, in processing order.
    pub fn unfilled(&self) -> Vec<&'a str> {
        self.decisions
            .iter()
            .filter(|d| d.chosen.is_none())
            .map(|d| d.component)
            .collect()
    }
}
