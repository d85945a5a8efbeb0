//! pom.xml parser
//!
//! Deserializes the parts of a Maven POM that carry versions:
//!
//! ```text
//! <project>
//!     <parent>...</parent>
//!     <properties>...</properties>
//!     <dependencies><dependency>...</dependency></dependencies>
//!     <dependencyManagement>
//!         <dependencies><dependency>...</dependency></dependencies>
//!     </dependencyManagement>
//! </project>
//! ```
//!
//! Repeated elements are collected into sequences during deserialization, so a
//! single `<dependency>` and a list of them end up with the same shape.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::manifest::discovery::load_documents;
use crate::manifest::traits::{ManifestError, ManifestParser};
use crate::manifest::types::{
    DeclaredDependency, SPRING_BOOT_DEPENDENCIES, SPRING_BOOT_GROUP, SPRING_BOOT_STARTER_PARENT,
};
use crate::manifest::variables::PropertyTable;

/// `<project>` root of a single POM file
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomProject {
    #[serde(default)]
    properties: Option<IndexMap<String, String>>,
    #[serde(default)]
    dependencies: Option<PomDependencies>,
    #[serde(default)]
    dependency_management: Option<PomDependencyManagement>,
    #[serde(default)]
    parent: Option<DeclaredDependency>,
}

#[derive(Debug, Default, Deserialize)]
struct PomDependencies {
    #[serde(default)]
    dependency: Vec<DeclaredDependency>,
}

#[derive(Debug, Default, Deserialize)]
struct PomDependencyManagement {
    #[serde(default)]
    dependencies: Option<PomDependencies>,
}

/// Parser for pom.xml files
pub struct PomParser;

impl PomParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PomParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestParser for PomParser {
    type Document = PomProject;

    fn format_name(&self) -> &'static str {
        "pom"
    }

    fn parse(&self, content: &str) -> Result<PomProject, ManifestError> {
        Ok(quick_xml::de::from_str(content)?)
    }
}

/// Aggregated view over every POM found in a project tree.
///
/// Each field concatenates the corresponding section of every file, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomManifest {
    properties: Vec<IndexMap<String, String>>,
    dependencies: Vec<Vec<DeclaredDependency>>,
    dependency_management: Vec<Vec<DeclaredDependency>>,
    parent: Vec<DeclaredDependency>,
    property_table: PropertyTable,
}

impl PomManifest {
    /// Load every file ending with `suffix` below `root`, leaving out `excluded` directories.
    ///
    /// Any unreadable or malformed file yields an empty view.
    pub async fn load(root: &Path, suffix: &str, excluded: &[&Path]) -> Self {
        match load_documents(&PomParser::new(), root, suffix, excluded).await {
            Ok(projects) => Self::from_projects(projects),
            Err(e) => {
                warn!("Ignoring pom files under {:?}: {}", root, e);
                Self::default()
            }
        }
    }

    /// Build a view from POM sources held in memory
    pub fn from_xml(sources: &[&str]) -> Result<Self, ManifestError> {
        let parser = PomParser::new();
        let projects = sources
            .iter()
            .map(|source| parser.parse(source))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_projects(projects))
    }

    pub fn from_projects(projects: impl IntoIterator<Item = PomProject>) -> Self {
        let mut manifest = Self::default();
        for project in projects {
            manifest.properties.extend(project.properties);
            manifest
                .dependencies
                .extend(project.dependencies.map(|d| d.dependency));
            manifest.dependency_management.extend(
                project
                    .dependency_management
                    .map(|m| m.dependencies.map(|d| d.dependency).unwrap_or_default()),
            );
            manifest.parent.extend(project.parent);
        }
        manifest.property_table = PropertyTable::from_maps(&manifest.properties);
        debug!(
            "Loaded pom view: {} property block(s), {} dependency block(s), {} management block(s), {} parent(s)",
            manifest.properties.len(),
            manifest.dependencies.len(),
            manifest.dependency_management.len(),
            manifest.parent.len()
        );
        manifest
    }

    pub fn properties(&self) -> &[IndexMap<String, String>] {
        &self.properties
    }

    pub fn parent(&self) -> &[DeclaredDependency] {
        &self.parent
    }

    pub fn dependency_management(&self) -> &[Vec<DeclaredDependency>] {
        &self.dependency_management
    }

    /// Names of every declared property, in declaration order, duplicates preserved
    pub fn property_names(&self) -> Vec<&str> {
        self.properties
            .iter()
            .flat_map(|map| map.keys().map(String::as_str))
            .collect()
    }

    /// Direct and managed dependencies that declare a version
    pub fn dependencies_with_versions(&self) -> Vec<&DeclaredDependency> {
        self.dependencies
            .iter()
            .chain(self.dependency_management.iter())
            .flatten()
            .filter(|dep| dep.declared_version().is_some())
            .collect()
    }

    /// Resolve a declared version through the manifest properties
    pub fn resolve(&self, version: &str) -> Option<String> {
        self.property_table.resolve(version)
    }

    /// Detect the Spring Boot release this project builds against.
    ///
    /// Lookup order:
    /// 1. `spring-boot-starter-parent` as `<parent>`, taken literally
    /// 2. `spring-boot-starter-parent` in any `<dependencyManagement>` block
    /// 3. `spring-boot-dependencies` in the first `<dependencyManagement>` block
    ///
    /// Managed versions are resolved through the properties. Returns `None` when
    /// no step yields a version.
    pub fn spring_boot_version(&self) -> Option<String> {
        let version = self
            .parent_boot_version()
            .or_else(|| {
                self.managed_version(
                    self.dependency_management.iter().flatten(),
                    SPRING_BOOT_STARTER_PARENT,
                )
            })
            .or_else(|| {
                self.managed_version(
                    self.dependency_management.first().into_iter().flatten(),
                    SPRING_BOOT_DEPENDENCIES,
                )
            });

        match &version {
            Some(version) => info!("Detected Spring Boot Version {}", version),
            None => info!("No Spring Boot version found."),
        }
        version
    }

    fn parent_boot_version(&self) -> Option<String> {
        self.parent
            .iter()
            .find(|parent| parent.is(SPRING_BOOT_GROUP, SPRING_BOOT_STARTER_PARENT))
            .and_then(|parent| parent.declared_version())
            .map(str::to_string)
    }

    fn managed_version<'a>(
        &self,
        mut entries: impl Iterator<Item = &'a DeclaredDependency>,
        artifact: &str,
    ) -> Option<String> {
        entries
            .find(|dep| dep.is(SPRING_BOOT_GROUP, artifact))
            .and_then(|dep| dep.declared_version())
            .and_then(|version| self.resolve(version))
            .filter(|version| !version.is_empty())
    }
}
