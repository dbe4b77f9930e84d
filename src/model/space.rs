//! The design space: components, budgets, and objective.

use std::collections::HashSet;

use super::types::{Component, ComponentOption, Constraints, Objective};
use crate::error::{Error, Result};

/// A complete configuration model.
///
/// Read-only for the duration of a search. Component order is the
/// declaration order and drives greedy processing and exhaustive
/// enumeration order.
///
/// # Examples
///
/// ```
/// use u_select::model::{Component, ComponentOption, Constraints, DesignSpace, Objective};
///
/// let space = DesignSpace::new(Objective::maximize("val"))
///     .with_component(
///         Component::new("a")
///             .with_option(ComponentOption::new("a1", 1.0, 1.0).with_metric("val", 5.0))
///             .with_option(ComponentOption::new("a2", 2.0, 1.0).with_metric("val", 9.0)),
///     )
///     .with_constraints(Constraints::default().with_max_mass(3.0));
/// assert!(space.validate().is_ok());
/// assert_eq!(space.combination_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DesignSpace {
    /// Slots in declaration order.
    pub components: Vec<Component>,
    /// Aggregate budgets.
    pub constraints: Constraints,
    /// Metric and direction to optimize.
    pub objective: Objective,
}

impl DesignSpace {
    /// Creates a space with no components and no bounds.
    pub fn new(objective: Objective) -> Self {
        Self {
            components: Vec::new(),
            constraints: Constraints::default(),
            objective,
        }
    }

    /// Appends a component.
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Sets the budgets.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Appends a component.
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Number of components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Looks up a component by name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Number of complete combinations, saturating at `u128::MAX`.
    ///
    /// One for a space without components (the empty combination), zero
    /// when any component has no options.
    pub fn combination_count(&self) -> u128 {
        self.components
            .iter()
            .fold(1u128, |acc, c| acc.saturating_mul(c.options.len() as u128))
    }

    /// Iterates over every option of every component.
    pub fn options(&self) -> impl Iterator<Item = &ComponentOption> {
        self.components.iter().flat_map(|c| c.options.iter())
    }

    /// Checks the model before any search runs.
    pub fn validate(&self) -> Result<()> {
        if self.objective.metric.trim().is_empty() {
            return Err(Error::InvalidObjective("metric name is empty".into()));
        }

        check_bound("max_mass", self.constraints.max_mass)?;
        check_bound("max_cost", self.constraints.max_cost)?;

        let mut seen = HashSet::with_capacity(self.components.len());
        for component in &self.components {
            if !seen.insert(component.name.as_str()) {
                return Err(Error::DuplicateComponent(component.name.clone()));
            }
            for option in &component.options {
                validate_option(component, option)?;
            }
        }

        let metric = self.objective.metric.as_str();
        let mut options = self.options().peekable();
        if options.peek().is_some() && !options.any(|o| o.defines(metric)) {
            return Err(Error::UnknownMetric(metric.to_string()));
        }

        Ok(())
    }
}

fn check_bound(name: &str, bound: Option<f64>) -> Result<()> {
    match bound {
        Some(v) if !v.is_finite() || v < 0.0 => Err(Error::InvalidConstraint(format!(
            "{name} must be a finite non-negative number, got {v}"
        ))),
        _ => Ok(()),
    }
}

fn validate_option(component: &Component, option: &ComponentOption) -> Result<()> {
    let invalid = |reason: String| Error::InvalidOption {
        component: component.name.clone(),
        option: option.name.clone(),
        reason,
    };

    if option.name.trim().is_empty() {
        return Err(invalid("name is empty".into()));
    }
    if !option.mass.is_finite() || option.mass < 0.0 {
        return Err(invalid(format!(
            "mass must be a finite non-negative number, got {}",
            option.mass
        )));
    }
    if !option.cost.is_finite() || option.cost < 0.0 {
        return Err(invalid(format!(
            "cost must be a finite non-negative number, got {}",
            option.cost
        )));
    }
    if let Some((key, value)) = option.metrics.iter().find(|(_, v)| !v.is_finite()) {
        return Err(invalid(format!("metric `{key}` is not finite ({value})")));
    }
    Ok(())
}
