//! bompack error taxonomy
//!
//! [`BompackError`] is the top-level error for the whole tool. Each
//! component defines its own domain enum ([`FsError`], [`WorkspaceError`],
//! [`ArchiveError`], [`SbomError`]) and converts upward with `From`, so
//! `?` propagation works across crate boundaries.
//!
//! # Categories
//!
//! - **Path validation**: `Fs` (`NotFound` at the argument boundary)
//! - **Temporary workspace**: `Workspace`
//! - **Archive mutation**: `Archive` (`UnsupportedFormat` for non-zip input)
//! - **Manifest generation/redaction**: `Sbom`
//! - **Anything else**: `Unexpected`, the residual catch-all for
//!   failures outside the domain taxonomy (stdout writes, rendering)

use std::fmt;

/// Top-level bompack error.
#[derive(Debug, thiserror::Error)]
pub enum BompackError {
    /// Path validation failure.
    #[error("path error: {0}")]
    Fs(#[from] FsError),

    /// Temporary workspace failure.
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),

    /// Archive mutation failure.
    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// Manifest generation or redaction failure.
    #[error("sbom error: {0}")]
    Sbom(#[from] SbomError),

    /// Uncategorized residual failure.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Expected kind of a filesystem path at the validation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// An existing regular file.
    File,
    /// An existing directory.
    Directory,
    /// Either an existing file or an existing directory.
    Any,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::File => write!(f, "file"),
            PathKind::Directory => write!(f, "directory"),
            PathKind::Any => write!(f, "file or directory"),
        }
    }
}

/// Path validation error.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// The path does not denote an existing entry of the expected kind.
    #[error("not found: {path} (expected existing {expected})")]
    NotFound {
        /// The offending path as given by the caller.
        path: String,
        /// What the caller expected the path to be.
        expected: PathKind,
    },

    /// Metadata lookup or canonicalization failed for another reason.
    #[error("io error: {path}: {source}")]
    Io {
        /// Related path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Temporary workspace error.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    /// The platform temp root refused to allocate a workspace directory.
    #[error("failed to create temporary workspace: {0}")]
    Create(std::io::Error),

    /// A staging subdirectory could not be created inside the workspace.
    #[error("failed to create workspace subdirectory '{name}': {source}")]
    Subdir {
        /// Requested subdirectory name.
        name: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Archive mutation error.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The file is not a valid zip container.
    #[error("unsupported package format: {path}: not a valid zip archive")]
    UnsupportedFormat {
        /// Path of the rejected archive.
        path: String,
    },

    /// Copying the archive into the output directory failed.
    #[error("failed to copy archive: {from} -> {to}: {source}")]
    Copy {
        /// Source archive path.
        from: String,
        /// Destination path.
        to: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// File I/O around the archive failed.
    #[error("io error: {path}: {source}")]
    Io {
        /// Related path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The zip codec rejected an update or extraction.
    #[error("archive update failed: {path}: {reason}")]
    Update {
        /// Related archive path.
        path: String,
        /// Codec-reported reason.
        reason: String,
    },
}

/// Manifest generation/redaction error as seen from the orchestrator.
///
/// The sbom crate carries a more detailed domain enum and converts into
/// these variants; the structured per-entity error list is logged at the
/// call site before the conversion happens.
#[derive(Debug, thiserror::Error)]
pub enum SbomError {
    /// The generator reported one or more entity errors.
    #[error("sbom generation failed: {0}")]
    Generation(String),

    /// Redacting an existing manifest failed.
    #[error("sbom redaction failed: {0}")]
    Redaction(String),

    /// Redaction was aborted by a caller-requested cancellation.
    #[error("sbom redaction cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_path_and_kind() {
        let err = FsError::NotFound {
            path: "/missing/solution".to_owned(),
            expected: PathKind::Directory,
        };
        let msg = err.to_string();
        assert!(msg.contains("/missing/solution"));
        assert!(msg.contains("directory"));
    }

    #[test]
    fn path_kind_display() {
        assert_eq!(PathKind::File.to_string(), "file");
        assert_eq!(PathKind::Directory.to_string(), "directory");
        assert_eq!(PathKind::Any.to_string(), "file or directory");
    }

    #[test]
    fn unsupported_format_display() {
        let err = ArchiveError::UnsupportedFormat {
            path: "package.dmapp".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("package.dmapp"));
        assert!(msg.contains("not a valid zip"));
    }

    #[test]
    fn copy_error_display_names_both_paths() {
        let err = ArchiveError::Copy {
            from: "a.zip".to_owned(),
            to: "out/a.zip".to_owned(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("a.zip"));
        assert!(msg.contains("out/a.zip"));
    }

    #[test]
    fn workspace_create_display() {
        let err = WorkspaceError::Create(std::io::Error::other("tmpfs full"));
        assert!(err.to_string().contains("tmpfs full"));
    }

    #[test]
    fn unexpected_display_carries_message() {
        let err = BompackError::Unexpected("stdout closed".to_owned());
        assert_eq!(err.to_string(), "unexpected error: stdout closed");
    }

    #[test]
    fn converts_fs_error_to_top_level() {
        let err = FsError::NotFound {
            path: "x".to_owned(),
            expected: PathKind::File,
        };
        let top: BompackError = err.into();
        assert!(matches!(top, BompackError::Fs(FsError::NotFound { .. })));
    }

    #[test]
    fn converts_archive_error_to_top_level() {
        let err = ArchiveError::UnsupportedFormat {
            path: "x".to_owned(),
        };
        let top: BompackError = err.into();
        assert!(matches!(
            top,
            BompackError::Archive(ArchiveError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn converts_sbom_error_to_top_level() {
        let top: BompackError = SbomError::Cancelled.into();
        assert!(matches!(top, BompackError::Sbom(SbomError::Cancelled)));
    }
}
