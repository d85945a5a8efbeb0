//! Manifest layer
//! - traits.rs: ManifestParser trait and ManifestError
//! - types.rs: Common types (DeclaredDependency, Spring Boot coordinates)
//! - variables.rs: `${property}` resolution against manifest properties
//! - discovery.rs: Locating manifest files by suffix under a directory tree
//! - pom.rs: Maven pom.xml parser and aggregated view
//! - sbom.rs: JSON bill-of-materials parser and aggregated view

pub mod discovery;
pub mod pom;
pub mod sbom;
pub mod traits;
pub mod types;
pub mod variables;

pub use pom::{PomManifest, PomParser};
pub use sbom::{SbomComponent, SbomManifest, SbomParser};
pub use traits::{ManifestError, ManifestParser};
pub use types::DeclaredDependency;
pub use variables::PropertyTable;
