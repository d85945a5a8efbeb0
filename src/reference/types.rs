//! Reference table types

use serde::{Deserialize, Serialize};

/// A dependency version managed by a Spring Boot release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePackage {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ReferencePackage {
    pub fn new(group: &str, name: &str, version: &str) -> Self {
        Self {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    pub fn is(&self, group: &str, name: &str) -> bool {
        self.group == group && self.name == name
    }
}

/// A version property a Spring Boot release lets projects override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceProperty {
    pub property: String,
}

impl ReferenceProperty {
    pub fn new(property: &str) -> Self {
        Self {
            property: property.to_string(),
        }
    }
}

/// Kind of reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// group / artifact / version rows
    Dependencies,
    /// library / version property rows
    Properties,
}

impl TableKind {
    /// Prefix of the cache file name
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Dependencies => "dependencies",
            TableKind::Properties => "properties",
        }
    }

    /// Page name under the appendix URL scheme
    pub fn appendix_page(&self) -> &'static str {
        match self {
            TableKind::Dependencies => "coordinates",
            TableKind::Properties => "properties",
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URL layout of the Spring Boot reference documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocsScheme {
    /// `/spring-boot/docs/{release}/reference/html/dependency-versions.html`,
    /// one page holding both tables
    Legacy,
    /// `/spring-boot/{release}/appendix/dependency-versions/{coordinates|properties}.html`,
    /// one page per table
    Appendix,
}

impl DocsScheme {
    /// Index of the `<tbody>` holding the data rows.
    ///
    /// Legacy pages put the coordinates table before the properties table on the
    /// same page; appendix pages carry a single table each.
    pub fn body_index(&self, kind: TableKind) -> usize {
        match (self, kind) {
            (DocsScheme::Legacy, TableKind::Dependencies) => 0,
            (DocsScheme::Legacy, TableKind::Properties) => 1,
            (DocsScheme::Appendix, _) => 0,
        }
    }
}
