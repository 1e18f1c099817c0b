//! Temporary workspace lifecycle
//!
//! Every generating operation stages its intermediate artifacts (unzipped
//! package contents, unredacted manifest) in a [`TempWorkspace`]. The
//! workspace is exclusively owned by one invocation and removed exactly
//! once per operation, on success and failure paths alike.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::WorkspaceError;

/// A process-local scratch directory, deleted when the operation ends.
///
/// Deletion happens either through an explicit [`dispose`](Self::dispose)
/// call (the normal path, which logs deletion failures) or through `Drop`
/// as a backstop if the operation unwinds. Cleanup failure is logged and
/// never escalated so it cannot mask the primary result.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: Option<tempfile::TempDir>,
}

impl TempWorkspace {
    /// Allocate a uniquely named directory under the platform temp root.
    pub fn create() -> Result<Self, WorkspaceError> {
        let dir = tempfile::Builder::new()
            .prefix("bompack-")
            .tempdir()
            .map_err(WorkspaceError::Create)?;
        debug!(path = %dir.path().display(), "temporary workspace created");
        Ok(Self { dir: Some(dir) })
    }

    /// The workspace root.
    pub fn path(&self) -> &Path {
        self.dir
            .as_ref()
            .map(tempfile::TempDir::path)
            .unwrap_or_else(|| Path::new(""))
    }

    /// Create a named staging subdirectory and return its path.
    pub fn subdir(&self, name: &str) -> Result<PathBuf, WorkspaceError> {
        let path = self.path().join(name);
        std::fs::create_dir_all(&path).map_err(|source| WorkspaceError::Subdir {
            name: name.to_owned(),
            source,
        })?;
        Ok(path)
    }

    /// Recursively delete the workspace.
    ///
    /// Deletion failure is logged, not returned, since cleanup problems
    /// must not override the operation's own outcome.
    pub fn dispose(mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().display().to_string();
            match dir.close() {
                Ok(()) => debug!(path = %path, "temporary workspace removed"),
                Err(e) => warn!(path = %path, error = %e, "failed to remove temporary workspace"),
            }
        }
    }
}

// Backstop for panics and early unwinds; TempDir removes the tree itself.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_allocates_unique_directories() {
        let a = TempWorkspace::create().expect("workspace a");
        let b = TempWorkspace::create().expect("workspace b");

        assert!(a.path().is_dir());
        assert!(b.path().is_dir());
        assert_ne!(a.path(), b.path());

        a.dispose();
        b.dispose();
    }

    #[test]
    fn dispose_removes_contents_recursively() {
        let ws = TempWorkspace::create().expect("workspace");
        let root = ws.path().to_path_buf();
        let nested = ws.subdir("package").expect("subdir");
        std::fs::write(nested.join("inner.txt"), b"payload").expect("write");

        ws.dispose();
        assert!(!root.exists(), "workspace root should be gone");
    }

    #[test]
    fn drop_removes_workspace_without_dispose() {
        let root;
        {
            let ws = TempWorkspace::create().expect("workspace");
            root = ws.path().to_path_buf();
            assert!(root.is_dir());
        }
        assert!(!root.exists(), "drop should remove the workspace");
    }

    #[test]
    fn subdir_creates_named_child() {
        let ws = TempWorkspace::create().expect("workspace");
        let sub = ws.subdir("package").expect("subdir");

        assert!(sub.is_dir());
        assert_eq!(sub.parent(), Some(ws.path()));
        ws.dispose();
    }
}
