//! Configuration model.
//!
//! A [`DesignSpace`] is an ordered list of [`Component`] slots, each with
//! an ordered list of [`ComponentOption`] candidates, plus aggregate
//! [`Constraints`] and an [`Objective`].
//!
//! The model is consumed, never mutated, by the solvers. Validation
//! ([`DesignSpace::validate`]) runs before any search so that malformed
//! options, bad bounds, or an unknown objective metric are reported up
//! front instead of surfacing mid-search.
//!
//! With the `serde` feature the model can be loaded from YAML or TOML
//! (see [`DesignSpace::load`]).

#[cfg(feature = "serde")]
mod loader;
mod space;
mod types;

pub use space::DesignSpace;
pub use types::{
    Component, ComponentOption, Constraints, Direction, Objective, Totals, COST_METRIC,
    MASS_METRIC,
};
