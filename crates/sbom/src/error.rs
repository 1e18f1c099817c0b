//! Manifest generation/redaction error types
//!
//! [`ManifestError`] covers everything the generator and redactor can
//! report. Generation failures carry the structured per-entity error
//! list so the caller can log each one individually before converting
//! into the top-level [`BompackError`].

use std::fmt;

use bompack_core::error::{BompackError, SbomError};

/// A single structured error reported by the generator for one entity
/// (typically one unreadable file under a scan root).
#[derive(Debug, Clone)]
pub struct EntityError {
    /// Path of the entity that failed.
    pub path: String,
    /// Reason reported for the failure.
    pub reason: String,
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Manifest domain error.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The generator reported one or more entity errors; no manifest
    /// was produced.
    #[error("manifest generation failed with {} error(s)", .0.len())]
    Generation(Vec<EntityError>),

    /// The manifest under redaction could not be read or parsed.
    #[error("redaction failed: {path}: {reason}")]
    Redaction {
        /// Path of the manifest being redacted.
        path: String,
        /// Failure reason.
        reason: String,
    },

    /// Redaction was aborted by cooperative cancellation.
    #[error("redaction cancelled")]
    Cancelled,

    /// Serializing the manifest document failed.
    #[error("manifest serialization failed: {0}")]
    Serialize(String),

    /// File I/O while producing a manifest failed.
    #[error("io error: {path}: {source}")]
    Io {
        /// Related path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl From<ManifestError> for BompackError {
    fn from(err: ManifestError) -> Self {
        match err {
            ManifestError::Generation(errors) => BompackError::Sbom(SbomError::Generation(
                format!("{} entity error(s)", errors.len()),
            )),
            ManifestError::Redaction { path, reason } => {
                BompackError::Sbom(SbomError::Redaction(format!("{path}: {reason}")))
            }
            ManifestError::Cancelled => BompackError::Sbom(SbomError::Cancelled),
            ManifestError::Serialize(msg) => BompackError::Sbom(SbomError::Generation(msg)),
            ManifestError::Io { path, source } => {
                BompackError::Sbom(SbomError::Generation(format!("io error: {path}: {source}")))
            }
        }
    }
}
