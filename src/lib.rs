//! Slot-based design configuration optimizer.
//!
//! Picks one option for each component slot of a design so that a chosen
//! metric is maximized or minimized while total mass and total cost stay
//! within optional budgets:
//!
//! - **Exhaustive search**: enumerates every combination and returns the
//!   true optimum, or nothing when no combination fits the budgets.
//! - **Greedy construction**: one pass over the components, taking the
//!   best option that still fits. Fast, not optimal, and possibly partial.
//!
//! # Example
//!
//! ```
//! use u_select::model::{Component, ComponentOption, Constraints, DesignSpace, Objective};
//! use u_select::{optimize, Strategy};
//!
//! let space = DesignSpace::new(Objective::maximize("coverage_time"))
//!     .with_component(
//!         Component::new("battery")
//!             .with_option(ComponentOption::new("small", 1.0, 20.0).with_metric("coverage_time", 30.0))
//!             .with_option(ComponentOption::new("large", 3.0, 45.0).with_metric("coverage_time", 75.0)),
//!     )
//!     .with_component(
//!         Component::new("camera")
//!             .with_option(ComponentOption::new("basic", 0.5, 30.0))
//!             .with_option(ComponentOption::new("thermal", 1.5, 120.0).with_metric("coverage_time", 10.0)),
//!     )
//!     .with_constraints(Constraints::default().with_max_mass(4.0).with_max_cost(150.0));
//!
//! let outcome = optimize(&space, Strategy::Exhaustive).unwrap();
//! let best = outcome.best().unwrap();
//! assert_eq!(best.score, 75.0);
//! assert_eq!(best.combination.get("battery").unwrap().name, "large");
//! ```
//!
//! # Feature Flags
//!
//! - `serde` (default): YAML/TOML loading via [`DesignSpace::load`](model::DesignSpace::load)
//! - `export` (default): CSV output in [`export`]
//! - `cli`: the `u-select` command-line binary

pub mod error;
pub mod eval;
pub mod exhaustive;
#[cfg(feature = "export")]
pub mod export;
pub mod greedy;
pub mod model;
pub mod optimizer;
pub mod report;
pub mod solution;

pub use error::{Error, Result};
pub use optimizer::{optimize, Optimizer, OptimizerConfig, Outcome, Strategy};
pub use report::Report;
pub use solution::{Completeness, Solution};
