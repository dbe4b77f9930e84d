//! Strategy selection.
//!
//! [`Optimizer`] validates a [`DesignSpace`](crate::model::DesignSpace),
//! runs the configured [`Strategy`], and hands back the strategy's own
//! result wrapped in an [`Outcome`].

mod config;
mod facade;

pub use config::{OptimizerConfig, Strategy};
pub use facade::{optimize, Optimizer, Outcome};
