//! Bill-of-materials parser
//!
//! Reads the flat `components` list of a JSON SBOM (CycloneDX style):
//!
//! ```text
//! { "components": [ { "group": "org.springframework", "name": "spring-core", "version": "6.0.9" } ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::{info, warn};

use crate::manifest::discovery::load_documents;
use crate::manifest::traits::{ManifestError, ManifestParser};
use crate::manifest::types::{SPRING_BOOT_ARTIFACT, SPRING_BOOT_GROUP};

/// A single SBOM component
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SbomComponent {
    /// Older schemas may omit the group
    #[serde(default)]
    pub group: Option<String>,
    /// `null` reads as an empty name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

impl SbomComponent {
    pub fn new(group: Option<&str>, name: &str, version: Option<&str>) -> Self {
        Self {
            group: group.map(str::to_string),
            name: name.to_string(),
            version: version.map(str::to_string),
        }
    }

    /// True when the component carries exactly these coordinates
    pub fn is(&self, group: &str, name: &str) -> bool {
        self.group.as_deref() == Some(group) && self.name == name
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root of a single SBOM document
#[derive(Debug, Default, Deserialize)]
pub struct SbomDocument {
    #[serde(default)]
    components: Vec<SbomComponent>,
}

/// Parser for JSON bill-of-materials files
pub struct SbomParser;

impl SbomParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SbomParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestParser for SbomParser {
    type Document = SbomDocument;

    fn format_name(&self) -> &'static str {
        "sbom"
    }

    fn parse(&self, content: &str) -> Result<SbomDocument, ManifestError> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Components of every SBOM found in a project tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SbomManifest {
    components: Vec<SbomComponent>,
}

impl SbomManifest {
    /// Load every file ending with `suffix` below `root`, leaving out `excluded` directories.
    ///
    /// Any unreadable or malformed file yields an empty view.
    pub async fn load(root: &Path, suffix: &str, excluded: &[&Path]) -> Self {
        match load_documents(&SbomParser::new(), root, suffix, excluded).await {
            Ok(documents) => Self::from_documents(documents),
            Err(e) => {
                warn!("Ignoring sbom files under {:?}: {}", root, e);
                Self::default()
            }
        }
    }

    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        let document = SbomParser::new().parse(content)?;
        Ok(Self::from_documents([document]))
    }

    pub fn from_documents(documents: impl IntoIterator<Item = SbomDocument>) -> Self {
        Self {
            components: documents
                .into_iter()
                .flat_map(|document| document.components)
                .collect(),
        }
    }

    pub fn from_components(components: Vec<SbomComponent>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[SbomComponent] {
        &self.components
    }

    /// Detect the Spring Boot release from the `spring-boot` component.
    ///
    /// Falls back to a component named `spring-boot` without the expected group.
    pub fn spring_boot_version(&self) -> Option<String> {
        let spring_boot = self
            .components
            .iter()
            .find(|c| c.is(SPRING_BOOT_GROUP, SPRING_BOOT_ARTIFACT))
            .or_else(|| {
                self.components
                    .iter()
                    .find(|c| c.name == SPRING_BOOT_ARTIFACT)
            });

        let version = spring_boot
            .and_then(|c| c.version.as_deref())
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        match &version {
            Some(version) => info!("Detected Spring Boot Version {}", version),
            None => info!("No Spring Boot version found"),
        }
        version
    }
}
