//! Parser trait definition

/// Trait for parsing a single manifest file into its format-specific document
pub trait ManifestParser {
    /// Parsed representation of one file
    type Document;

    /// Human readable format name, used in log messages
    fn format_name(&self) -> &'static str;

    /// Parse the content of one manifest file
    fn parse(&self, content: &str) -> Result<Self::Document, ManifestError>;
}

/// Error type for manifest loading
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Failed to read a manifest file
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Malformed XML manifest
    #[error("Invalid XML: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// Malformed JSON manifest
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
