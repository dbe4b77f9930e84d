//! Loading a [`DesignSpace`] from YAML or TOML.
//!
//! The component table is a mapping from slot name to an `options` list.
//! Mapping order in the document becomes slot order, so the loader reads
//! the mapping entry by entry instead of through a hash map.
//!
//! ```yaml
//! components:
//!   frame:
//!     options:
//!       - { name: alu, mass: 2, cost: 10, coverage_time: 5 }
//! constraints:
//!   max_mass: 10
//! objective:
//!   metric: coverage_time
//!   type: maximize
//! ```

use std::fmt;
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use super::space::DesignSpace;
use super::types::{Component, ComponentOption, Constraints, Objective};
use crate::error::{Error, Result};

#[derive(Deserialize)]
struct RawSpace {
    components: ComponentList,
    #[serde(default)]
    constraints: Option<Constraints>,
    objective: Objective,
}

#[derive(Deserialize)]
struct RawComponent {
    options: Vec<ComponentOption>,
}

struct ComponentList(Vec<Component>);

impl<'de> Deserialize<'de> for ComponentList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ListVisitor;

        impl<'de> Visitor<'de> for ListVisitor {
            type Value = ComponentList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of component name to an options list")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut components = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, raw)) = map.next_entry::<String, RawComponent>()? {
                    components.push(Component {
                        name,
                        options: raw.options,
                    });
                }
                Ok(ComponentList(components))
            }
        }

        deserializer.deserialize_map(ListVisitor)
    }
}

impl From<RawSpace> for DesignSpace {
    fn from(raw: RawSpace) -> Self {
        Self {
            components: raw.components.0,
            constraints: raw.constraints.unwrap_or_default(),
            objective: raw.objective,
        }
    }
}

fn finish(raw: RawSpace) -> Result<DesignSpace> {
    let space = DesignSpace::from(raw);
    space.validate()?;
    tracing::debug!(
        components = space.component_count(),
        combinations = %space.combination_count(),
        metric = %space.objective.metric,
        direction = %space.objective.direction,
        "design space loaded"
    );
    Ok(space)
}

impl DesignSpace {
    /// Loads a space from a file, choosing the format by extension
    /// (`yaml`, `yml` or `toml`).
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, has an unrecognized
    /// extension, fails to parse, or fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml_file(path),
            "toml" => Self::from_toml_file(path),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Loads a space from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses and validates a space from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        finish(serde_yaml::from_str(s)?)
    }

    /// Loads a space from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates a space from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        finish(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Direction;
    use std::io::Write;

    const YAML: &str = r#"
components:
  zeta:
    options:
      - { name: z1, mass: 1, cost: 1, val: 5 }
      - { name: z2, mass: 2, cost: 1, val: 9 }
  alpha:
    options:
      - name: a1
        mass: 1
        cost: 1
        val: 3
        range: 2.5
constraints:
  max_mass: 3
objective:
  metric: val
  type: maximize
"#;

    #[test]
    fn test_yaml_preserves_component_order() {
        let space = DesignSpace::from_yaml_str(YAML).unwrap();
        let names: Vec<&str> = space.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(space.components[0].options[1].name, "z2");
        assert_eq!(space.constraints.max_mass, Some(3.0));
        assert_eq!(space.constraints.max_cost, None);
        assert_eq!(space.objective.direction, Direction::Maximize);
    }

    #[test]
    fn test_yaml_collects_metrics() {
        let space = DesignSpace::from_yaml_str(YAML).unwrap();
        let a1 = &space.components[1].options[0];
        assert_eq!(a1.metric("val"), 3.0);
        assert_eq!(a1.metric("range"), 2.5);
        assert!(!a1.metrics.contains_key("mass"));
    }

    #[test]
    fn test_yaml_without_constraints() {
        let yaml = r#"
components:
  a:
    options:
      - { name: a1, mass: 1, cost: 1 }
objective:
  metric: cost
  direction: minimize
"#;
        let space = DesignSpace::from_yaml_str(yaml).unwrap();
        assert!(space.constraints.is_unbounded());
        assert_eq!(space.objective.direction, Direction::Minimize);
    }

    #[test]
    fn test_yaml_unknown_direction_rejected() {
        let yaml = YAML.replace("type: maximize", "type: maximise");
        let err = DesignSpace::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
        assert!(err.to_string().contains("maximise"));
    }

    #[test]
    fn test_yaml_missing_mass_rejected() {
        let yaml = YAML.replace("{ name: z1, mass: 1, cost: 1, val: 5 }", "{ name: z1, cost: 1 }");
        let err = DesignSpace::from_yaml_str(&yaml).unwrap_err();
        assert!(err.to_string().contains("mass"));
    }

    #[test]
    fn test_yaml_missing_cost_rejected() {
        let yaml = YAML.replace("{ name: z1, mass: 1, cost: 1, val: 5 }", "{ name: z1, mass: 1 }");
        let err = DesignSpace::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
        assert!(err.to_string().contains("cost"));
    }

    #[test]
    fn test_yaml_ignores_non_numeric_fields() {
        let yaml = r#"
components:
  frame:
    options:
      - { name: alu, mass: 2, cost: 10, coverage_time: 5, vendor: acme }
      - name: carbon
        mass: 1
        cost: 30
        coverage_time: 8
        foldable: true
        notes: [prototype, "needs jig"]
objective:
  metric: coverage_time
  type: maximize
"#;
        let space = DesignSpace::from_yaml_str(yaml).unwrap();
        let alu = &space.components[0].options[0];
        assert_eq!(alu.metric("coverage_time"), 5.0);
        assert!(!alu.defines("vendor"));
        let carbon = &space.components[0].options[1];
        assert_eq!(carbon.metrics.len(), 1);

        let outcome = crate::optimize(&space, crate::Strategy::Exhaustive).unwrap();
        let best = outcome.best().unwrap();
        assert_eq!(best.score, 8.0);
        assert_eq!(best.combination.get("frame").unwrap().name, "carbon");
    }

    #[test]
    fn test_toml_ignores_non_numeric_fields() {
        let toml = r#"
[components.frame]
options = [{ name = "alu", mass = 2, cost = 10, coverage_time = 5, vendor = "acme" }]

[objective]
metric = "coverage_time"
type = "maximize"
"#;
        let space = DesignSpace::from_toml_str(toml).unwrap();
        let alu = &space.components[0].options[0];
        assert_eq!(alu.metric("coverage_time"), 5.0);
        assert!(!alu.metrics.contains_key("vendor"));
    }

    #[test]
    fn test_yaml_validation_runs() {
        let yaml = YAML.replace("metric: val", "metric: value");
        let err = DesignSpace::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, Error::UnknownMetric(_)));
    }

    #[test]
    fn test_toml_preserves_component_order() {
        let toml = r#"
[components.zeta]
options = [
    { name = "z1", mass = 1.0, cost = 1.0, val = 5.0 },
    { name = "z2", mass = 2.0, cost = 1.0, val = 9.0 },
]

[components.alpha]
options = [{ name = "a1", mass = 1.0, cost = 1.0, val = 3.0 }]

[constraints]
max_cost = 10.0

[objective]
metric = "val"
type = "minimize"
"#;
        let space = DesignSpace::from_toml_str(toml).unwrap();
        let names: Vec<&str> = space.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(space.constraints.max_cost, Some(10.0));
        assert_eq!(space.objective.direction, Direction::Minimize);
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();
        let space = DesignSpace::load(file.path()).unwrap();
        assert_eq!(space.component_count(), 2);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        assert!(matches!(
            DesignSpace::load(file.path()),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            DesignSpace::load("/nonexistent/space.yaml"),
            Err(Error::Io(_))
        ));
    }
}
