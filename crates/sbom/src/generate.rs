//! Manifest generation
//!
//! [`ManifestGenerator`] is the seam the orchestrator talks to; the
//! built-in [`SpdxGenerator`] walks the scan roots, checksums every file
//! and emits one merged SPDX 2.3 JSON document into the output
//! directory as [`GENERATED_MANIFEST_NAME`].

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{EntityError, ManifestError};
use crate::metadata::PackageMetadata;
use crate::spdx::{
    DOCUMENT_SPDX_ID, FILE_SPDX_ID_PREFIX, ROOT_PACKAGE_SPDX_ID, SpdxChecksum, SpdxCreationInfo,
    SpdxDocument, SpdxFile, SpdxPackage, SpdxRelationship,
};
use crate::util;

/// Fixed filename of a freshly generated (unredacted) manifest.
pub const GENERATED_MANIFEST_NAME: &str = "manifest.spdx.json";

/// Scan scope for one generation run.
///
/// `generate-and-add` scans two roots merged into a single manifest; the
/// root directory holds the solution itself and the component directory
/// holds the unzipped package contents. Plain `generate` scans one root.
#[derive(Debug, Clone)]
pub struct ScanRoots {
    root: PathBuf,
    component: Option<PathBuf>,
}

impl ScanRoots {
    /// Scan a single directory.
    pub fn single(root: PathBuf) -> Self {
        Self {
            root,
            component: None,
        }
    }

    /// Scan a solution root and a separate component directory together.
    pub fn with_component(root: PathBuf, component: PathBuf) -> Self {
        Self {
            root,
            component: Some(component),
        }
    }

    /// The solution/scan root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The component directory, when scanning two scopes.
    pub fn component(&self) -> Option<&Path> {
        self.component.as_deref()
    }
}

/// Seam between the orchestrator and whatever produces manifests.
///
/// On failure the implementation returns the structured entity-error
/// list; the caller logs each entry individually.
pub trait ManifestGenerator {
    /// Produce a manifest for `roots` into `out_dir`, returning its path.
    fn generate(
        &self,
        roots: &ScanRoots,
        metadata: PackageMetadata,
        out_dir: &Path,
    ) -> impl Future<Output = Result<PathBuf, ManifestError>> + Send;
}

/// Built-in file-inventory SPDX 2.3 generator.
#[derive(Debug, Clone)]
pub struct SpdxGenerator {
    namespace_base: String,
}

impl Default for SpdxGenerator {
    fn default() -> Self {
        Self {
            // Namespace base is mandatory in SPDX; each document appends
            // a fresh UUID to it.
            namespace_base: "https://bompack.dev/spdx".to_owned(),
        }
    }
}

impl SpdxGenerator {
    /// Generator with a custom document namespace base URI.
    pub fn with_namespace_base(namespace_base: impl Into<String>) -> Self {
        Self {
            namespace_base: namespace_base.into(),
        }
    }
}

impl ManifestGenerator for SpdxGenerator {
    async fn generate(
        &self,
        roots: &ScanRoots,
        metadata: PackageMetadata,
        out_dir: &Path,
    ) -> Result<PathBuf, ManifestError> {
        debug!(root = %roots.root().display(), "starting manifest generation");

        let mut errors = Vec::new();
        let mut inventory = Vec::new();
        collect_files(roots.root(), &mut inventory, &mut errors);
        if let Some(component) = roots.component() {
            collect_files(component, &mut inventory, &mut errors);
        }

        let mut files = Vec::with_capacity(inventory.len());
        for (index, (absolute, relative)) in inventory.iter().enumerate() {
            match tokio::fs::read(absolute).await {
                Ok(bytes) => {
                    let digest = Sha256::digest(&bytes);
                    files.push(SpdxFile {
                        spdx_id: format!("{FILE_SPDX_ID_PREFIX}{index}"),
                        file_name: format!("./{relative}"),
                        checksums: vec![SpdxChecksum {
                            algorithm: "SHA256".to_owned(),
                            checksum_value: hex::encode(digest),
                        }],
                    });
                }
                Err(e) => errors.push(EntityError {
                    path: absolute.display().to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        if !errors.is_empty() {
            return Err(ManifestError::Generation(errors));
        }

        let file_ids: Vec<String> = files.iter().map(|f| f.spdx_id.clone()).collect();
        let mut relationships = vec![SpdxRelationship {
            spdx_element_id: DOCUMENT_SPDX_ID.to_owned(),
            relationship_type: "DESCRIBES".to_owned(),
            related_spdx_element: ROOT_PACKAGE_SPDX_ID.to_owned(),
        }];
        relationships.extend(file_ids.iter().map(|id| SpdxRelationship {
            spdx_element_id: ROOT_PACKAGE_SPDX_ID.to_owned(),
            relationship_type: "CONTAINS".to_owned(),
            related_spdx_element: id.clone(),
        }));

        let document = SpdxDocument {
            spdx_version: "SPDX-2.3".to_owned(),
            spdx_id: DOCUMENT_SPDX_ID.to_owned(),
            name: format!("{}-{}", metadata.name(), metadata.version()),
            data_license: "CC0-1.0".to_owned(),
            document_namespace: format!("{}/{}", self.namespace_base, uuid::Uuid::new_v4()),
            creation_info: SpdxCreationInfo {
                created: util::current_timestamp(),
                creators: vec![
                    "Tool: bompack".to_owned(),
                    format!("Organization: {}", metadata.supplier()),
                ],
            },
            document_describes: vec![ROOT_PACKAGE_SPDX_ID.to_owned()],
            packages: vec![SpdxPackage {
                spdx_id: ROOT_PACKAGE_SPDX_ID.to_owned(),
                name: metadata.name().to_owned(),
                version_info: metadata.version().to_owned(),
                supplier: format!("Organization: {}", metadata.supplier()),
                download_location: "NOASSERTION".to_owned(),
                files_analyzed: true,
                has_files: file_ids,
            }],
            files,
            relationships,
        };

        let json = serde_json::to_vec_pretty(&document)
            .map_err(|e| ManifestError::Serialize(e.to_string()))?;

        tokio::fs::create_dir_all(out_dir)
            .await
            .map_err(|source| ManifestError::Io {
                path: out_dir.display().to_string(),
                source,
            })?;
        let manifest_path = out_dir.join(GENERATED_MANIFEST_NAME);
        tokio::fs::write(&manifest_path, json)
            .await
            .map_err(|source| ManifestError::Io {
                path: manifest_path.display().to_string(),
                source,
            })?;

        info!(
            manifest = %manifest_path.display(),
            file_count = document.files.len(),
            "manifest generated"
        );
        Ok(manifest_path)
    }
}

/// Walk `root` depth-first, recording `(absolute, root-relative)` file
/// pairs. Unreadable directories become entity errors; the walk
/// continues so the caller sees every problem at once.
fn collect_files(
    root: &Path,
    inventory: &mut Vec<(PathBuf, String)>,
    errors: &mut Vec<EntityError>,
) {
    fn walk(
        dir: &Path,
        root: &Path,
        inventory: &mut Vec<(PathBuf, String)>,
        errors: &mut Vec<EntityError>,
    ) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                errors.push(EntityError {
                    path: dir.display().to_string(),
                    reason: e.to_string(),
                });
                return;
            }
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => paths.push(entry.path()),
                Err(e) => errors.push(EntityError {
                    path: dir.display().to_string(),
                    reason: e.to_string(),
                }),
            }
        }
        // Deterministic manifest ordering regardless of readdir order.
        paths.sort();

        for path in paths {
            if path.is_dir() {
                walk(&path, root, inventory, errors);
            } else if path.is_file() {
                let relative = path
                    .strip_prefix(root)
                    .unwrap_or(&path)
                    .to_string_lossy()
                    .into_owned();
                inventory.push((path, relative));
            }
        }
    }

    walk(root, root, inventory, errors);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_files_is_recursive_and_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("sub")).expect("mkdir");
        std::fs::write(dir.path().join("b.txt"), b"b").expect("write");
        std::fs::write(dir.path().join("a.txt"), b"a").expect("write");
        std::fs::write(dir.path().join("sub").join("c.txt"), b"c").expect("write");

        let mut inventory = Vec::new();
        let mut errors = Vec::new();
        collect_files(dir.path(), &mut inventory, &mut errors);

        assert!(errors.is_empty());
        let relative: Vec<&str> = inventory.iter().map(|(_, r)| r.as_str()).collect();
        assert_eq!(relative, vec!["a.txt", "b.txt", "sub/c.txt"]);
    }

    #[test]
    fn collect_files_reports_missing_root() {
        let mut inventory = Vec::new();
        let mut errors = Vec::new();
        collect_files(Path::new("/no/such/root"), &mut inventory, &mut errors);

        assert!(inventory.is_empty());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].path.contains("/no/such/root"));
    }
}
