//! Candidate combinations.

use crate::model::{ComponentOption, Totals};

/// One selected option together with the component it fills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick<'a> {
    /// Component (slot) name.
    pub component: &'a str,
    /// Selected option.
    pub option: &'a ComponentOption,
}

/// An ordered selection of at most one option per component.
///
/// Picks are kept in component order. A combination borrows from the
/// [`DesignSpace`](crate::model::DesignSpace) it was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Combination<'a> {
    picks: Vec<Pick<'a>>,
}

impl<'a> Combination<'a> {
    /// Creates an empty combination.
    pub fn new() -> Self {
        Self { picks: Vec::new() }
    }

    /// Creates an empty combination with room for `n` picks.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            picks: Vec::with_capacity(n),
        }
    }

    /// Appends a pick.
    ///
    /// Returns `false` and leaves the combination unchanged if `component`
    /// already has an option.
    pub fn push(&mut self, component: &'a str, option: &'a ComponentOption) -> bool {
        if self.contains(component) {
            return false;
        }
        self.picks.push(Pick { component, option });
        true
    }

    /// Removes every pick, keeping the allocation.
    pub fn clear(&mut self) {
        self.picks.clear();
    }

    /// Picks in component order.
    pub fn picks(&self) -> &[Pick<'a>] {
        &self.picks
    }

    /// Selected options in component order.
    pub fn options(&self) -> impl Iterator<Item = &'a ComponentOption> + '_ {
        self.picks.iter().map(|p| p.option)
    }

    /// Whether `component` has a pick.
    pub fn contains(&self, component: &str) -> bool {
        self.picks.iter().any(|p| p.component == component)
    }

    /// The option selected for `component`, if any.
    pub fn get(&self, component: &str) -> Option<&'a ComponentOption> {
        self.picks
            .iter()
            .find(|p| p.component == component)
            .map(|p| p.option)
    }

    /// Aggregate mass and cost.
    pub fn totals(&self) -> Totals {
        Totals::of(self.options())
    }

    /// Number of picks.
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Whether nothing is picked.
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_lookup() {
        let a = ComponentOption::new("a1", 1.0, 2.0);
        let b = ComponentOption::new("b1", 3.0, 4.0);
        let mut combo = Combination::with_capacity(2);
        assert!(combo.is_empty());

        combo.push("a", &a);
        combo.push("b", &b);

        assert_eq!(combo.len(), 2);
        assert!(combo.contains("a"));
        assert!(!combo.contains("c"));
        assert_eq!(combo.get("b").map(|o| o.name.as_str()), Some("b1"));
        assert_eq!(combo.totals(), Totals { mass: 4.0, cost: 6.0 });

        let names: Vec<&str> = combo.picks().iter().map(|p| p.component).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_push_rejects_filled_component() {
        let a1 = ComponentOption::new("a1", 1.0, 2.0);
        let a2 = ComponentOption::new("a2", 5.0, 5.0);
        let mut combo = Combination::new();
        assert!(combo.push("a", &a1));
        assert!(!combo.push("a", &a2));

        assert_eq!(combo.len(), 1);
        assert_eq!(combo.get("a").map(|o| o.name.as_str()), Some("a1"));
        assert_eq!(combo.totals(), Totals { mass: 1.0, cost: 2.0 });
    }

    #[test]
    fn test_clear() {
        let a = ComponentOption::new("a1", 1.0, 2.0);
        let mut combo = Combination::new();
        combo.push("a", &a);
        combo.clear();
        assert!(combo.is_empty());
        assert_eq!(combo.totals(), Totals::default());
    }
}
