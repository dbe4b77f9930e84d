//! Optimizer configuration.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::exhaustive::ExhaustiveConfig;

/// Search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Full enumeration; returns the true optimum.
    #[default]
    Exhaustive,
    /// Single-pass per-component heuristic.
    Greedy,
}

impl Strategy {
    /// Resolves a strategy name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`Strategy::Exhaustive`] with a
    /// warning.
    ///
    /// ```
    /// use u_select::Strategy;
    ///
    /// assert_eq!(Strategy::from_name("greedy"), Strategy::Greedy);
    /// assert_eq!(Strategy::from_name("Brute-Force"), Strategy::Exhaustive);
    /// assert_eq!(Strategy::from_name("annealing"), Strategy::Exhaustive);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "exhaustive" | "brute_force" | "brute-force" | "bruteforce" => Strategy::Exhaustive,
            "greedy" => Strategy::Greedy,
            other => {
                tracing::warn!(strategy = other, "unknown strategy, using exhaustive");
                Strategy::Exhaustive
            }
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Exhaustive => "exhaustive",
            Strategy::Greedy => "greedy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// Configuration for [`Optimizer`](super::Optimizer).
///
/// # Examples
///
/// ```
/// use u_select::{OptimizerConfig, Strategy};
///
/// let config = OptimizerConfig::default()
///     .with_strategy(Strategy::Greedy)
///     .with_combination_limit(10_000);
/// assert_eq!(config.strategy, Strategy::Greedy);
/// assert_eq!(config.exhaustive.combination_limit, Some(10_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// Strategy to run.
    pub strategy: Strategy,
    /// Settings used when the strategy is exhaustive.
    pub exhaustive: ExhaustiveConfig,
}

impl OptimizerConfig {
    /// Configuration for `strategy` with default settings.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Caps the number of combinations exhaustive search will enumerate.
    pub fn with_combination_limit(mut self, limit: u128) -> Self {
        self.exhaustive.combination_limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exhaustive() {
        assert_eq!(Strategy::default(), Strategy::Exhaustive);
        assert_eq!(OptimizerConfig::default().strategy, Strategy::Exhaustive);
        assert_eq!(OptimizerConfig::default().exhaustive.combination_limit, None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Strategy::from_name("greedy"), Strategy::Greedy);
        assert_eq!(Strategy::from_name(" GREEDY "), Strategy::Greedy);
        assert_eq!(Strategy::from_name("exhaustive"), Strategy::Exhaustive);
        assert_eq!(Strategy::from_name("brute_force"), Strategy::Exhaustive);
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(Strategy::from_name("genetic"), Strategy::Exhaustive);
        assert_eq!(Strategy::from_name(""), Strategy::Exhaustive);
        assert_eq!("tabu".parse::<Strategy>(), Ok(Strategy::Exhaustive));
    }

    #[test]
    fn test_display_roundtrip() {
        for s in [Strategy::Exhaustive, Strategy::Greedy] {
            assert_eq!(Strategy::from_name(&s.to_string()), s);
        }
    }

    #[test]
    fn test_builder() {
        let config = OptimizerConfig::new(Strategy::Greedy).with_combination_limit(5);
        assert_eq!(config.strategy, Strategy::Greedy);
        assert_eq!(config.exhaustive.combination_limit, Some(5));
        let config = config.with_strategy(Strategy::Exhaustive);
        assert_eq!(config.strategy, Strategy::Exhaustive);
    }
}
