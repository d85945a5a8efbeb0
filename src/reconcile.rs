//! Comparison of declared dependencies against a Spring Boot reference table

use serde::Serialize;
use tracing::{debug, info};

use crate::manifest::variables::is_variable;
use crate::manifest::{PomManifest, SbomManifest};
use crate::reference::{ReferenceCache, ReferencePackage, ReferenceSource};

/// Logged when the reference table for a release turned out empty
const NO_REFERENCE_DATA: &str = "Spring Boot default versions URL no longer exists.";

/// A declared package that Spring Boot also manages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MismatchRecord {
    pub group: String,
    pub name: String,
    /// Version found in the manifest, after property resolution
    pub input_file_version: Option<String>,
    /// Version the Spring Boot release manages
    pub boot_version: String,
}

impl MismatchRecord {
    pub fn new(
        group: &str,
        name: &str,
        input_file_version: Option<&str>,
        boot_version: &str,
    ) -> Self {
        Self {
            group: group.to_string(),
            name: name.to_string(),
            input_file_version: input_file_version.map(str::to_string),
            boot_version: boot_version.to_string(),
        }
    }

    fn is(&self, group: &str, name: &str) -> bool {
        self.group == group && self.name == name
    }
}

/// Declared POM dependencies whose coordinates Spring Boot already manages.
///
/// One record per coordinate pair, keeping the first declaration.
pub async fn similar_pom_packages<S: ReferenceSource>(
    manifest: &PomManifest,
    boot_version: Option<&str>,
    cache: &ReferenceCache<S>,
) -> Vec<MismatchRecord> {
    let Some(boot_version) = boot_version else {
        return Vec::new();
    };

    let defaults = cache.default_versions(boot_version).await;
    if defaults.is_empty() {
        info!("{}", NO_REFERENCE_DATA);
        return Vec::new();
    }

    let mut records: Vec<MismatchRecord> = Vec::new();
    for dependency in manifest.dependencies_with_versions() {
        let Some(reference) = find_reference(&defaults, &dependency.group, &dependency.artifact)
        else {
            continue;
        };
        if records
            .iter()
            .any(|r| r.is(&dependency.group, &dependency.artifact))
        {
            continue;
        }

        let declared = dependency.declared_version().unwrap_or_default();
        let resolved = manifest.resolve(declared);
        if resolved.is_none() && is_variable(declared) {
            debug!(
                "Unresolved property {} for {}:{}",
                declared, dependency.group, dependency.artifact
            );
        }

        records.push(MismatchRecord::new(
            &dependency.group,
            &dependency.artifact,
            resolved.as_deref(),
            &reference.version,
        ));
    }

    info!("Declared Pom Package Count - {}", records.len());
    records
}

/// Declared POM property names that Spring Boot uses to pin a managed version.
///
/// One entry per declaration, so a property declared by several modules is listed once per module.
pub async fn similar_pom_properties<S: ReferenceSource>(
    manifest: &PomManifest,
    boot_version: Option<&str>,
    cache: &ReferenceCache<S>,
) -> Vec<String> {
    let Some(boot_version) = boot_version else {
        return Vec::new();
    };

    let defaults = cache.default_properties(boot_version).await;
    if defaults.is_empty() {
        info!("{}", NO_REFERENCE_DATA);
        return Vec::new();
    }

    let matched: Vec<String> = manifest
        .property_names()
        .into_iter()
        .filter(|name| defaults.iter().any(|p| p.property == *name))
        .map(str::to_string)
        .collect();

    info!("Declared Pom Properties Count - {}", matched.len());
    matched
}

/// SBOM components whose version differs from the one Spring Boot manages
pub async fn mismatched_sbom_packages<S: ReferenceSource>(
    manifest: &SbomManifest,
    boot_version: Option<&str>,
    cache: &ReferenceCache<S>,
) -> Vec<MismatchRecord> {
    let Some(boot_version) = boot_version else {
        return Vec::new();
    };

    let defaults = cache.default_versions(boot_version).await;
    if defaults.is_empty() {
        info!("{}", NO_REFERENCE_DATA);
        return Vec::new();
    }

    let mut records: Vec<MismatchRecord> = Vec::new();
    for component in manifest.components() {
        let Some(group) = component.group.as_deref() else {
            continue;
        };
        let Some(version) = component.version.as_deref() else {
            continue;
        };

        for reference in defaults.iter().filter(|r| r.is(group, &component.name)) {
            if reference.version == version {
                continue;
            }
            let record =
                MismatchRecord::new(group, &component.name, Some(version), &reference.version);
            if !records.contains(&record) {
                records.push(record);
            }
        }
    }

    info!("Mismatched Package Count - {}", records.len());
    records
}

fn find_reference<'a>(
    defaults: &'a [ReferencePackage],
    group: &str,
    name: &str,
) -> Option<&'a ReferencePackage> {
    defaults.iter().find(|r| r.is(group, name))
}
