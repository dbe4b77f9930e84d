//! Error types for u-select.

use thiserror::Error;

/// Result type alias for u-select operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, validating, or searching a design space.
///
/// Search outcomes such as "no feasible combination" or a partial greedy
/// result are not errors; they are reported through the result values.
#[derive(Debug, Error)]
pub enum Error {
    /// An option carries an unusable mass, cost, metric, or name.
    #[error("Invalid option `{option}` in component `{component}`: {reason}")]
    InvalidOption {
        component: String,
        option: String,
        reason: String,
    },

    /// Two components share the same name.
    #[error("Duplicate component: {0}")]
    DuplicateComponent(String),

    /// A mass or cost bound is negative or not a number.
    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    /// The objective is malformed.
    #[error("Invalid objective: {0}")]
    InvalidObjective(String),

    /// The objective metric is not defined by any option.
    #[error("Unknown objective metric: {0}")]
    UnknownMetric(String),

    /// The objective direction is neither `maximize` nor `minimize`.
    #[error("Unknown objective direction: {0:?} (expected \"maximize\" or \"minimize\")")]
    UnknownDirection(String),

    /// The exhaustive search space exceeds the configured limit.
    #[error("Search space too large: {count} combinations exceeds limit of {limit}")]
    SearchSpaceTooLarge { count: u128, limit: u128 },

    /// The configuration file extension is not recognized.
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error.
    #[cfg(feature = "serde")]
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parse error.
    #[cfg(feature = "serde")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV write error.
    #[cfg(feature = "export")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_option() {
        let err = Error::InvalidOption {
            component: "frame".into(),
            option: "steel".into(),
            reason: "mass must be non-negative".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid option `steel` in component `frame`: mass must be non-negative"
        );
    }

    #[test]
    fn test_display_search_space() {
        let err = Error::SearchSpaceTooLarge {
            count: 1_000,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "Search space too large: 1000 combinations exceeds limit of 10"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
