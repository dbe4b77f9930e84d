//! Exhaustive search configuration.

/// Configuration for exhaustive search.
///
/// # Examples
///
/// ```
/// use u_select::exhaustive::ExhaustiveConfig;
///
/// let config = ExhaustiveConfig::default().with_combination_limit(1_000_000);
/// assert_eq!(config.combination_limit, Some(1_000_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExhaustiveConfig {
    /// Refuse to enumerate spaces with more combinations than this.
    ///
    /// The check happens before enumeration starts. `None` (the default)
    /// enumerates any space.
    pub combination_limit: Option<u128>,
}

impl ExhaustiveConfig {
    /// Sets the combination limit.
    pub fn with_combination_limit(mut self, limit: u128) -> Self {
        self.combination_limit = Some(limit);
        self
    }
}
