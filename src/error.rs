//! Error types for catalog loading.
//!
//! Validation findings are not errors; see [`crate::catalog::validate`].

use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures while reading translation inputs.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The input is not parseable as the expected catalog structure.
    #[error("Malformed catalog '{source_name}': {reason}")]
    MalformedCatalog { source_name: String, reason: String },

    /// A required catalog file or directory does not exist.
    #[error("Required input not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedCatalog {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput { path: path.into() }
    }
}
