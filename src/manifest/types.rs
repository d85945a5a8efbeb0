//! Common types for manifests

use serde::Deserialize;

/// Group of all Spring Boot artifacts
pub const SPRING_BOOT_GROUP: &str = "org.springframework.boot";

/// Parent POM artifact of Spring Boot applications
pub const SPRING_BOOT_STARTER_PARENT: &str = "spring-boot-starter-parent";

/// BOM artifact imported through `<dependencyManagement>`
pub const SPRING_BOOT_DEPENDENCIES: &str = "spring-boot-dependencies";

/// Core artifact listed in bills of materials
pub const SPRING_BOOT_ARTIFACT: &str = "spring-boot";

/// A dependency coordinate as written in a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeclaredDependency {
    /// Group identifier (e.g., "org.springframework.kafka")
    #[serde(default, rename = "groupId")]
    pub group: String,
    /// Artifact identifier (e.g., "spring-kafka")
    #[serde(default, rename = "artifactId")]
    pub artifact: String,
    /// Literal version or a `${property}` reference, if declared at all
    #[serde(default)]
    pub version: Option<String>,
}

impl DeclaredDependency {
    pub fn new(group: &str, artifact: &str, version: Option<&str>) -> Self {
        Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: version.map(str::to_string),
        }
    }

    /// True when both group and artifact equal the given coordinates
    pub fn is(&self, group: &str, artifact: &str) -> bool {
        self.group == group && self.artifact == artifact
    }

    /// The declared version, treating an empty element as undeclared
    pub fn declared_version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }
}
