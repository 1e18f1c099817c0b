//! Path validation at the argument boundary
//!
//! [`FsEntry`] is resolved exactly once, when arguments are parsed.
//! Downstream code receives an already-classified, existing path and
//! never re-inspects the filesystem to decide between file and directory.

use std::path::{Path, PathBuf};

use crate::error::{FsError, PathKind};

/// An existing filesystem entry, classified at validation time.
///
/// Paths are canonicalized during resolution so later operations
/// (parent lookup, directory-name defaulting) behave predictably for
/// relative input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    /// An existing regular file.
    File(PathBuf),
    /// An existing directory.
    Directory(PathBuf),
}

impl FsEntry {
    /// Classify `path`, requiring it to match `expected`.
    ///
    /// Fails with [`FsError::NotFound`] when the path does not exist or
    /// exists as the wrong kind. No side effects.
    pub fn resolve(path: &Path, expected: PathKind) -> Result<Self, FsError> {
        let not_found = || FsError::NotFound {
            path: path.display().to_string(),
            expected,
        };

        let meta = std::fs::metadata(path).map_err(|_| not_found())?;
        let canonical = std::fs::canonicalize(path).map_err(|source| FsError::Io {
            path: path.display().to_string(),
            source,
        })?;

        match (meta.is_file(), expected) {
            (true, PathKind::File | PathKind::Any) => Ok(FsEntry::File(canonical)),
            (false, PathKind::Directory | PathKind::Any) if meta.is_dir() => {
                Ok(FsEntry::Directory(canonical))
            }
            _ => Err(not_found()),
        }
    }

    /// The underlying path, whichever kind it is.
    pub fn path(&self) -> &Path {
        match self {
            FsEntry::File(p) | FsEntry::Directory(p) => p,
        }
    }

    /// Normalize to a scan directory.
    ///
    /// A directory is returned as-is; a file is substituted by its
    /// containing directory. This runs before any metadata defaulting,
    /// so directory-name defaults never see a file name.
    pub fn as_directory(&self) -> PathBuf {
        match self {
            FsEntry::Directory(p) => p.clone(),
            FsEntry::File(p) => match p.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
        }
    }
}
