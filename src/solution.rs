//! Search results shared by every strategy.

use crate::eval::Combination;
use crate::model::Totals;

/// Whether every component received an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completeness<'a> {
    /// One option per component.
    Complete,
    /// Some components were left empty, listed in component order.
    Partial { unfilled: Vec<&'a str> },
}

/// A scored combination.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<'a> {
    /// Objective value of [`combination`](Self::combination).
    pub score: f64,
    /// Selected options in component order.
    pub combination: Combination<'a>,
    /// Whether the combination covers every component.
    pub completeness: Completeness<'a>,
}

impl<'a> Solution<'a> {
    /// A solution covering every component.
    pub fn complete(score: f64, combination: Combination<'a>) -> Self {
        Self {
            score,
            combination,
            completeness: Completeness::Complete,
        }
    }

    /// Whether every component has an option.
    pub fn is_complete(&self) -> bool {
        matches!(self.completeness, Completeness::Complete)
    }

    /// Components left without an option.
    pub fn unfilled(&self) -> &[&'a str] {
        match &self.completeness {
            Completeness::Complete => &[],
            Completeness::Partial { unfilled } => unfilled,
        }
    }

    /// Aggregate mass and cost of the combination.
    pub fn totals(&self) -> Totals {
        self.combination.totals()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentOption;

    #[test]
    fn test_complete_solution() {
        let a = ComponentOption::new("a1", 1.0, 2.0);
        let mut combo = Combination::new();
        combo.push("a", &a);
        let sol = Solution::complete(4.0, combo);
        assert!(sol.is_complete());
        assert!(sol.unfilled().is_empty());
        assert_eq!(sol.totals(), Totals { mass: 1.0, cost: 2.0 });
    }

    #[test]
    fn test_partial_solution() {
        let sol = Solution {
            score: 0.0,
            combination: Combination::new(),
            completeness: Completeness::Partial {
                unfilled: vec!["a", "b"],
            },
        };
        assert!(!sol.is_complete());
        assert_eq!(sol.unfilled(), &["a", "b"]);
    }
}
