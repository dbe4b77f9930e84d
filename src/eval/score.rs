//! Objective scoring.

use super::combination::Combination;

/// Sum of `metric` over every option in `combination`.
///
/// Options without the metric contribute zero, so the score is defined
/// for any combination, including empty and partial ones.
pub fn compute_score(combination: &Combination<'_>, metric: &str) -> f64 {
    combination.options().map(|o| o.metric(metric)).sum()
}
