//! File-based cache for Spring Boot reference tables

use std::future::Future;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::reference::error::{CacheError, FetchError};
use crate::reference::source::ReferenceSource;
use crate::reference::types::{ReferencePackage, ReferenceProperty, TableKind};

/// On-disk cache of Spring Boot reference tables.
///
/// One JSON array per release and table kind. A file that exists is final: an
/// empty array records that no reference data could be fetched for the release,
/// and the release is never fetched again.
pub struct ReferenceCache<S> {
    dir: PathBuf,
    source: S,
}

impl<S: ReferenceSource> ReferenceCache<S> {
    pub fn new(dir: impl Into<PathBuf>, source: S) -> Self {
        Self {
            dir: dir.into(),
            source,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Path of the cache file for a release, e.g. `.cache/dependencies_3.1.0.json`
    pub fn cache_path(&self, kind: TableKind, release: &str) -> PathBuf {
        let release: String = release
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        self.dir.join(format!("{}_{}.json", kind.as_str(), release))
    }

    /// Managed dependency versions of a release, fetched on first use
    pub async fn default_versions(&self, release: &str) -> Vec<ReferencePackage> {
        self.load_or_fetch(TableKind::Dependencies, release, || {
            self.source.fetch_dependencies(release)
        })
        .await
    }

    /// Version property names of a release, fetched on first use
    pub async fn default_properties(&self, release: &str) -> Vec<ReferenceProperty> {
        self.load_or_fetch(TableKind::Properties, release, || {
            self.source.fetch_properties(release)
        })
        .await
    }

    async fn load_or_fetch<T, F, Fut>(&self, kind: TableKind, release: &str, fetch: F) -> Vec<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, FetchError>>,
    {
        let path = self.cache_path(kind, release);

        if let Err(e) = self.populate(kind, release, &path, fetch).await {
            error!(
                "Error retrieving spring default {} for {}: {}",
                kind, release, e
            );
        }

        read_rows(&path).await.unwrap_or_else(|e| {
            debug!("Treating cache file {:?} as empty: {}", path, e);
            Vec::new()
        })
    }

    async fn populate<T, F, Fut>(
        &self,
        kind: TableKind,
        release: &str,
        path: &Path,
        fetch: F,
    ) -> Result<(), CacheError>
    where
        T: Serialize,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, FetchError>>,
    {
        tokio::fs::create_dir_all(&self.dir).await?;

        if tokio::fs::try_exists(path).await? {
            debug!("Using cached {} for Spring Boot {}", kind, release);
            return Ok(());
        }

        let rows = match fetch().await {
            Ok(rows) => {
                info!(
                    "Fetched {} reference {} for Spring Boot {}",
                    rows.len(),
                    kind,
                    release
                );
                rows
            }
            Err(e) => {
                warn!(
                    "URL not found - Spring Boot default versions URL no longer exists. ({})",
                    e
                );
                Vec::new()
            }
        };

        write_rows(path, &rows).await
    }
}

async fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CacheError> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

async fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), CacheError> {
    let content = serde_json::to_string_pretty(rows)?;
    tokio::fs::write(path, content).await?;
    Ok(())
}
