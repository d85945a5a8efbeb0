//! Reference source test utilities

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use boot_version_check::reference::{
    FetchError, ReferencePackage, ReferenceProperty, ReferenceSource,
};

/// Mock reference source serving fixed tables per release
#[derive(Default)]
pub struct MockSource {
    dependencies: HashMap<String, Vec<ReferencePackage>>,
    properties: HashMap<String, Vec<ReferenceProperty>>,
    dependency_fetches: AtomicUsize,
    property_fetches: AtomicUsize,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `(group, name, version)` rows for `release`
    pub fn with_dependencies(mut self, release: &str, packages: &[(&str, &str, &str)]) -> Self {
        self.dependencies.insert(
            release.to_string(),
            packages
                .iter()
                .map(|(group, name, version)| ReferencePackage::new(group, name, version))
                .collect(),
        );
        self
    }

    /// Serve property names for `release`
    pub fn with_properties(mut self, release: &str, properties: &[&str]) -> Self {
        self.properties.insert(
            release.to_string(),
            properties
                .iter()
                .map(|property| ReferenceProperty::new(property))
                .collect(),
        );
        self
    }

    pub fn dependency_fetches(&self) -> usize {
        self.dependency_fetches.load(Ordering::SeqCst)
    }

    pub fn property_fetches(&self) -> usize {
        self.property_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReferenceSource for MockSource {
    async fn fetch_dependencies(
        &self,
        release: &str,
    ) -> Result<Vec<ReferencePackage>, FetchError> {
        self.dependency_fetches.fetch_add(1, Ordering::SeqCst);
        self.dependencies
            .get(release)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(release.to_string()))
    }

    async fn fetch_properties(&self, release: &str) -> Result<Vec<ReferenceProperty>, FetchError> {
        self.property_fetches.fetch_add(1, Ordering::SeqCst);
        self.properties
            .get(release)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(release.to_string()))
    }
}
