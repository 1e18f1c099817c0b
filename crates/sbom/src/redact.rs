//! Manifest redaction
//!
//! Strips local file-path references from a generated manifest before it
//! is distributed standalone: the file inventory, every per-package
//! `hasFiles` list and every relationship touching a file element. The
//! document's package description and creation info survive unchanged.
//!
//! Redaction is the only cancellable step in any pipeline; the token is
//! checked cooperatively between parse and write.

use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::ManifestError;
use crate::spdx::SpdxDocument;

/// Fixed filename of a redacted standalone manifest.
pub const REDACTED_MANIFEST_NAME: &str = "sbom.json";

/// Seam between the orchestrator and whatever redacts manifests.
pub trait ManifestRedactor {
    /// Write a redacted copy of `manifest` into `out_dir`, returning the
    /// new file's path. Honors `cancel` cooperatively.
    fn redact(
        &self,
        manifest: &Path,
        out_dir: &Path,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<PathBuf, ManifestError>> + Send;
}

/// Built-in SPDX 2.3 redactor.
#[derive(Debug, Clone, Default)]
pub struct SpdxRedactor;

impl ManifestRedactor for SpdxRedactor {
    async fn redact(
        &self,
        manifest: &Path,
        out_dir: &Path,
        cancel: &CancellationToken,
    ) -> Result<PathBuf, ManifestError> {
        debug!(manifest = %manifest.display(), "starting manifest redaction");

        if cancel.is_cancelled() {
            return Err(ManifestError::Cancelled);
        }

        let bytes = tokio::fs::read(manifest)
            .await
            .map_err(|source| ManifestError::Io {
                path: manifest.display().to_string(),
                source,
            })?;
        let mut document: SpdxDocument =
            serde_json::from_slice(&bytes).map_err(|e| ManifestError::Redaction {
                path: manifest.display().to_string(),
                reason: e.to_string(),
            })?;

        let removed = document.files.len();
        document.files.clear();
        for package in &mut document.packages {
            package.has_files.clear();
            package.files_analyzed = false;
        }
        document.relationships.retain(|r| !r.involves_file());

        if cancel.is_cancelled() {
            return Err(ManifestError::Cancelled);
        }

        let json = serde_json::to_vec_pretty(&document)
            .map_err(|e| ManifestError::Serialize(e.to_string()))?;
        tokio::fs::create_dir_all(out_dir)
            .await
            .map_err(|source| ManifestError::Io {
                path: out_dir.display().to_string(),
                source,
            })?;
        let redacted_path = out_dir.join(REDACTED_MANIFEST_NAME);
        tokio::fs::write(&redacted_path, json)
            .await
            .map_err(|source| ManifestError::Io {
                path: redacted_path.display().to_string(),
                source,
            })?;

        info!(
            manifest = %redacted_path.display(),
            removed_file_refs = removed,
            "manifest redacted"
        );
        Ok(redacted_path)
    }
}
