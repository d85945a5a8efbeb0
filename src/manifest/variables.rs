//! Property-variable resolution
//!
//! Maven versions may point at a build property instead of a literal value:
//!
//! ```text
//! <properties>
//!     <spring-kafka.version>3.0.9</spring-kafka.version>
//! </properties>
//! ...
//! <version>${spring-kafka.version}</version>
//! ```

use std::collections::HashMap;

use indexmap::IndexMap;

/// Marker opening a property reference
const VARIABLE_PREFIX: &str = "${";

/// Flattened property lookup built once per manifest view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    values: HashMap<String, String>,
}

impl PropertyTable {
    /// Flatten property maps in order; a later map overrides an earlier one on key collision
    pub fn from_maps<'a, I>(maps: I) -> Self
    where
        I: IntoIterator<Item = &'a IndexMap<String, String>>,
    {
        let mut values = HashMap::new();
        for map in maps {
            for (key, value) in map {
                values.insert(key.clone(), value.clone());
            }
        }
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Resolve a version string.
    ///
    /// Literal versions are returned unchanged. `${name}` is replaced by the value of
    /// property `name`, or `None` when no such property is declared.
    pub fn resolve(&self, version: &str) -> Option<String> {
        let Some(reference) = version.strip_prefix(VARIABLE_PREFIX) else {
            return Some(version.to_string());
        };
        let name = reference.replacen('}', "", 1);
        self.get(&name).map(str::to_string)
    }
}

/// True if the version is a `${...}` property reference
pub fn is_variable(version: &str) -> bool {
    version.starts_with(VARIABLE_PREFIX)
}
