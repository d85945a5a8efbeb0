//! Source trait for fetching Spring Boot reference tables

#[cfg(test)]
use mockall::automock;

use crate::reference::error::FetchError;
use crate::reference::types::{ReferencePackage, ReferenceProperty};

/// Trait for fetching the reference tables of a Spring Boot release
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReferenceSource: Send + Sync {
    /// Fetches the managed dependency versions of a release
    ///
    /// # Arguments
    /// * `release` - Spring Boot version as declared by the project (e.g., "3.1.0")
    ///
    /// # Returns
    /// * `Ok(Vec<ReferencePackage>)` - Rows in page order, possibly empty
    /// * `Err(FetchError)` - If no reference page could be retrieved
    async fn fetch_dependencies(
        &self,
        release: &str,
    ) -> Result<Vec<ReferencePackage>, FetchError>;

    /// Fetches the overridable version property names of a release
    async fn fetch_properties(&self, release: &str) -> Result<Vec<ReferenceProperty>, FetchError>;
}
