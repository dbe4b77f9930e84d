//! Aggregate budget checks.

use super::combination::Combination;
use crate::model::Constraints;

/// Whether `combination` satisfies every configured budget.
///
/// Mass and cost are summed over the whole combination; there is no
/// per-component check. With no bounds configured every combination is
/// feasible.
pub fn is_valid(combination: &Combination<'_>, constraints: &Constraints) -> bool {
    constraints.admits(combination.totals())
}
