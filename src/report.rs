//! Human-readable rendering of an optimization outcome.

use std::fmt;

use crate::model::DesignSpace;
use crate::optimizer::Outcome;

/// Text report for an [`Outcome`].
///
/// ```text
/// Best maximize of 'val': 12
/// Selected components:
/// - a: a2 (mass=2, cost=1)
/// - b: b1 (mass=1, cost=1)
/// Total mass=3, cost=2
/// ```
pub struct Report<'r, 'a> {
    space: &'a DesignSpace,
    outcome: &'r Outcome<'a>,
}

impl<'r, 'a> Report<'r, 'a> {
    pub fn new(space: &'a DesignSpace, outcome: &'r Outcome<'a>) -> Self {
        Self { space, outcome }
    }
}

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let objective = &self.space.objective;
        let Some(best) = self.outcome.best() else {
            return writeln!(f, "No feasible design satisfies the constraints.");
        };

        writeln!(
            f,
            "Best {} of '{}': {}",
            objective.direction, objective.metric, best.score
        )?;
        writeln!(f, "Selected components:")?;
        for pick in best.combination.picks() {
            writeln!(
                f,
                "- {}: {} (mass={}, cost={})",
                pick.component, pick.option.name, pick.option.mass, pick.option.cost
            )?;
        }
        let totals = best.totals();
        writeln!(f, "Total mass={}, cost={}", totals.mass, totals.cost)?;
        if !best.is_complete() {
            writeln!(f, "Unfilled components: {}", best.unfilled().join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, ComponentOption, Constraints, Objective};
    use crate::optimizer::{optimize, Strategy};

    fn space(max_mass: f64) -> DesignSpace {
        DesignSpace::new(Objective::maximize("val"))
            .with_component(
                Component::new("a")
                    .with_option(ComponentOption::new("a1", 1.0, 1.0).with_metric("val", 5.0))
                    .with_option(ComponentOption::new("a2", 2.0, 1.0).with_metric("val", 9.0)),
            )
            .with_component(
                Component::new("b")
                    .with_option(ComponentOption::new("b1", 1.0, 1.0).with_metric("val", 3.0)),
            )
            .with_constraints(Constraints::default().with_max_mass(max_mass))
    }

    #[test]
    fn test_report_complete() {
        let s = space(3.0);
        let outcome = optimize(&s, Strategy::Exhaustive).unwrap();
        let text = Report::new(&s, &outcome).to_string();
        assert_eq!(
            text,
            "Best maximize of 'val': 12\n\
             Selected components:\n\
             - a: a2 (mass=2, cost=1)\n\
             - b: b1 (mass=1, cost=1)\n\
             Total mass=3, cost=2\n"
        );
    }

    #[test]
    fn test_report_infeasible() {
        let s = space(1.0);
        let outcome = optimize(&s, Strategy::Exhaustive).unwrap();
        let text = Report::new(&s, &outcome).to_string();
        assert_eq!(text, "No feasible design satisfies the constraints.\n");
    }

    #[test]
    fn test_report_partial() {
        let s = space(2.0);
        let outcome = optimize(&s, Strategy::Greedy).unwrap();
        let text = Report::new(&s, &outcome).to_string();
        assert!(text.starts_with("Best maximize of 'val': 9\n"));
        assert!(text.ends_with("Unfilled components: b\n"));
    }
}
