//! Check runs: load manifests, detect the Spring Boot release, reconcile

use std::path::Path;

use tracing::info;

use crate::manifest::{PomManifest, SbomManifest};
use crate::reconcile::{mismatched_sbom_packages, similar_pom_packages, similar_pom_properties};
use crate::reference::{ReferenceCache, ReferenceSource};
use crate::report::{Report, ReportMode};

/// Check every POM below `root` against the Spring Boot release it builds on.
///
/// The cache directory is never searched for manifests.
pub async fn check_pom<S: ReferenceSource>(
    root: &Path,
    suffix: &str,
    cache: &ReferenceCache<S>,
) -> Report {
    info!("Checking {} files under {:?}", suffix, root);

    let manifest = PomManifest::load(root, suffix, &[cache.dir()]).await;
    let boot_version = manifest.spring_boot_version();

    let packages = similar_pom_packages(&manifest, boot_version.as_deref(), cache).await;
    let properties = similar_pom_properties(&manifest, boot_version.as_deref(), cache).await;

    Report::new(ReportMode::Pom, boot_version)
        .with_packages(packages)
        .with_properties(properties)
}

/// Check every SBOM below `root` against the Spring Boot release it lists
pub async fn check_sbom<S: ReferenceSource>(
    root: &Path,
    suffix: &str,
    cache: &ReferenceCache<S>,
) -> Report {
    info!("Checking {} files under {:?}", suffix, root);

    let manifest = SbomManifest::load(root, suffix, &[cache.dir()]).await;
    let boot_version = manifest.spring_boot_version();

    let packages = mismatched_sbom_packages(&manifest, boot_version.as_deref(), cache).await;

    Report::new(ReportMode::Sbom, boot_version).with_packages(packages)
}
