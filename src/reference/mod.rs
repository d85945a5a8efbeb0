//! Spring Boot reference data layer
//!
//! Fetches the dependency versions (and version property names) a Spring Boot
//! release manages, and keeps them in an on-disk JSON cache.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ SpringDocs  │────▶│    Cache    │◀────│  Reconciler │
//! │  (fetch)    │     │   (JSON)    │     │  (compare)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │    Table    │
//! │ (HTML rows) │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: File-based cache, one JSON file per release and table kind
//! - [`source`]: Trait for fetching reference tables from remote sources
//! - [`spring_docs`]: docs.spring.io implementation with legacy and appendix URL schemes
//! - [`table`]: Extraction of rows from the documentation HTML tables
//! - [`error`]: Error types for cache and fetch operations
//! - [`types`]: Reference rows and table/URL scheme kinds

pub mod cache;
pub mod error;
pub mod source;
pub mod spring_docs;
pub mod table;
pub mod types;

pub use cache::ReferenceCache;
pub use error::{CacheError, FetchError};
pub use source::ReferenceSource;
pub use spring_docs::SpringDocsSource;
pub use types::{DocsScheme, ReferencePackage, ReferenceProperty, TableKind};
