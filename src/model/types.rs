//! Options, components, budgets, and the objective.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Metric name that resolves to an option's mass.
pub const MASS_METRIC: &str = "mass";

/// Metric name that resolves to an option's cost.
pub const COST_METRIC: &str = "cost";

/// One concrete candidate for a component slot.
///
/// Any numeric key besides `name`, `mass` and `cost` in a configuration
/// file is collected into [`metrics`](Self::metrics). Other values (vendor
/// strings, notes, flags) are accepted and ignored.
///
/// # Examples
///
/// ```
/// use u_select::model::ComponentOption;
///
/// let opt = ComponentOption::new("li-ion", 1.5, 40.0).with_metric("capacity", 12.0);
/// assert_eq!(opt.metric("capacity"), 12.0);
/// assert_eq!(opt.metric("cost"), 40.0);
/// assert_eq!(opt.metric("range"), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentOption {
    /// Display name.
    pub name: String,
    /// Mass contributed to the design total.
    pub mass: f64,
    /// Cost contributed to the design total.
    pub cost: f64,
    /// Named metric values. Missing metrics score as zero.
    #[cfg_attr(
        feature = "serde",
        serde(flatten, deserialize_with = "attrs::numeric_only")
    )]
    pub metrics: BTreeMap<String, f64>,
}

#[cfg(feature = "serde")]
mod attrs {
    use std::collections::BTreeMap;

    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Attr {
        Number(f64),
        Other(IgnoredAny),
    }

    /// Keeps the numeric entries of a free-form option record.
    pub(super) fn numeric_only<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Attr>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, attr)| match attr {
                Attr::Number(value) => Some((key, value)),
                Attr::Other(_) => None,
            })
            .collect())
    }
}

impl ComponentOption {
    /// Creates an option with no metrics.
    pub fn new(name: impl Into<String>, mass: f64, cost: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            cost,
            metrics: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) a metric value.
    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    /// Value of `metric` for this option.
    ///
    /// `"mass"` and `"cost"` resolve to the option's own attributes;
    /// anything else is looked up in [`metrics`](Self::metrics), defaulting
    /// to `0.0`.
    pub fn metric(&self, metric: &str) -> f64 {
        match metric {
            MASS_METRIC => self.mass,
            COST_METRIC => self.cost,
            other => self.metrics.get(other).copied().unwrap_or(0.0),
        }
    }

    /// Whether this option defines `metric` (built-in attributes included).
    pub fn defines(&self, metric: &str) -> bool {
        metric == MASS_METRIC || metric == COST_METRIC || self.metrics.contains_key(metric)
    }
}

/// A named slot requiring one selected option.
///
/// Option order is preserved from the configuration; it is the greedy
/// tie-break order.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Slot name.
    pub name: String,
    /// Candidates in declaration order.
    pub options: Vec<ComponentOption>,
}

impl Component {
    /// Creates an empty component.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Appends an option.
    pub fn with_option(mut self, option: ComponentOption) -> Self {
        self.options.push(option);
        self
    }

    /// Number of candidates.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// Aggregate mass and cost of a set of options.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub mass: f64,
    pub cost: f64,
}

impl Totals {
    /// Totals with `option` added.
    pub fn add(self, option: &ComponentOption) -> Self {
        Self {
            mass: self.mass + option.mass,
            cost: self.cost + option.cost,
        }
    }

    /// Sums mass and cost over `options`.
    pub fn of<'a, I>(options: I) -> Self
    where
        I: IntoIterator<Item = &'a ComponentOption>,
    {
        options.into_iter().fold(Self::default(), Self::add)
    }
}

/// Upper bounds on aggregate mass and cost. `None` means unbounded.
///
/// # Examples
///
/// ```
/// use u_select::model::{Constraints, Totals};
///
/// let c = Constraints::default().with_max_mass(3.0);
/// assert!(c.admits(Totals { mass: 3.0, cost: 1e9 }));
/// assert!(!c.admits(Totals { mass: 3.5, cost: 0.0 }));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constraints {
    /// Ceiling on total mass.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub max_mass: Option<f64>,
    /// Ceiling on total cost.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub max_cost: Option<f64>,
}

impl Constraints {
    /// No bounds.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Sets the mass ceiling.
    pub fn with_max_mass(mut self, max_mass: f64) -> Self {
        self.max_mass = Some(max_mass);
        self
    }

    /// Sets the cost ceiling.
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// Whether `totals` stays within every configured bound (inclusive).
    pub fn admits(&self, totals: Totals) -> bool {
        self.max_mass.map_or(true, |max| totals.mass <= max)
            && self.max_cost.map_or(true, |max| totals.cost <= max)
    }

    /// Whether no bound is configured.
    pub fn is_unbounded(&self) -> bool {
        self.max_mass.is_none() && self.max_cost.is_none()
    }
}

/// Whether larger or smaller metric values are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Direction {
    /// Whether `candidate` is strictly better than `incumbent`.
    ///
    /// Equal scores never improve, so the earlier of two tied candidates
    /// is kept.
    pub fn improves(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Direction::Maximize => candidate > incumbent,
            Direction::Minimize => candidate < incumbent,
        }
    }

    /// Orders two metric values best-first.
    ///
    /// Used with a stable sort so equal values keep their relative order.
    pub fn rank(self, a: f64, b: f64) -> Ordering {
        match self {
            Direction::Maximize => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
            Direction::Minimize => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }

    /// Lowercase name as written in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Maximize => "maximize",
            Direction::Minimize => "minimize",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maximize" => Ok(Direction::Maximize),
            "minimize" => Ok(Direction::Minimize),
            other => Err(Error::UnknownDirection(other.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.as_str().to_string()
    }
}

/// The metric being optimized and its direction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Objective {
    /// Metric name, matched against option metrics.
    pub metric: String,
    /// Optimization direction. Written as `type` in configuration files.
    #[cfg_attr(feature = "serde", serde(rename = "type", alias = "direction"))]
    pub direction: Direction,
}

impl Objective {
    /// Maximize `metric`.
    pub fn maximize(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            direction: Direction::Maximize,
        }
    }

    /// Minimize `metric`.
    pub fn minimize(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            direction: Direction::Minimize,
        }
    }
}
