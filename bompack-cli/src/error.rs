//! CLI-specific error type
//!
//! Every failure maps to process exit code 1; clap reports its own usage
//! errors before any handler runs.

use bompack_core::error::{ArchiveError, BompackError, FsError, WorkspaceError};
use bompack_sbom::ManifestError;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-facing message; the
/// structured generation-error list is logged at the call site before
/// this error is produced.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Wrapped domain error from the core or sbom crates.
    #[error("{0}")]
    Core(#[from] BompackError),

    /// The generator reported failure; details were already logged.
    #[error("failed to generate SBOM file")]
    GenerationFailed,

    /// Logging initialisation failed.
    #[error("logging init error: {0}")]
    Logging(String),
}

// Residual failures outside the domain taxonomy (stdout writes, output
// rendering) land in the `Unexpected` catch-all.

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Core(BompackError::Unexpected(format!("io error: {e}")))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Core(BompackError::Unexpected(format!("json output error: {e}")))
    }
}

impl From<ArchiveError> for CliError {
    fn from(e: ArchiveError) -> Self {
        Self::Core(e.into())
    }
}

impl From<WorkspaceError> for CliError {
    fn from(e: WorkspaceError) -> Self {
        Self::Core(e.into())
    }
}

impl From<FsError> for CliError {
    fn from(e: FsError) -> Self {
        Self::Core(e.into())
    }
}

impl From<ManifestError> for CliError {
    fn from(e: ManifestError) -> Self {
        Self::Core(e.into())
    }
}
