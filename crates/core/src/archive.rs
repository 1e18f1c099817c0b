//! Package archive mutation
//!
//! Splices a manifest into a zip-based package as the fixed entry
//! [`MANIFEST_ENTRY_NAME`], and extracts packages for scanning. The
//! target is updated in place only when the caller gives no output
//! directory; with an output directory the original archive is left
//! byte-for-byte untouched and a copy receives the mutation.
//!
//! The update itself rewrites the archive next to the target and swaps
//! it in with a rename, so an interrupted update never replaces a valid
//! archive with a corrupted one. Existing entries are raw-copied without
//! recompression; a prior manifest entry is dropped during the rewrite,
//! which is what makes re-adding idempotent.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::error::ArchiveError;

/// Fixed name of the manifest entry inside a package archive.
pub const MANIFEST_ENTRY_NAME: &str = "sbom.json";

/// Insert `manifest` into `archive` as the fixed manifest entry.
///
/// With `output_dir` given, the directory is created (idempotently), the
/// archive is copied into it under its original filename and the copy is
/// updated; the original stays untouched. Without it, `archive` itself
/// is updated. Returns the path of the mutated archive.
///
/// Fails with [`ArchiveError::UnsupportedFormat`] when the archive is
/// not a valid zip container; in that case nothing has been written to
/// the update target.
pub fn add_manifest(
    archive: &Path,
    manifest: &Path,
    output_dir: Option<&Path>,
) -> Result<PathBuf, ArchiveError> {
    let target = match output_dir {
        None => archive.to_path_buf(),
        Some(out) => {
            std::fs::create_dir_all(out).map_err(|source| ArchiveError::Io {
                path: out.display().to_string(),
                source,
            })?;
            let file_name = archive.file_name().ok_or_else(|| ArchiveError::Io {
                path: archive.display().to_string(),
                source: std::io::Error::other("archive path has no file name"),
            })?;
            let dest = out.join(file_name);
            std::fs::copy(archive, &dest).map_err(|source| ArchiveError::Copy {
                from: archive.display().to_string(),
                to: dest.display().to_string(),
                source,
            })?;
            debug!(from = %archive.display(), to = %dest.display(), "package copied to output");
            dest
        }
    };

    rewrite_with_manifest(&target, manifest)?;
    info!(package = %target.display(), entry = MANIFEST_ENTRY_NAME, "manifest added to package");
    Ok(target)
}

/// Extract `archive` into `dest` (created if missing).
pub fn extract(archive: &Path, dest: &Path) -> Result<(), ArchiveError> {
    let file = File::open(archive).map_err(|source| ArchiveError::Io {
        path: archive.display().to_string(),
        source,
    })?;
    let mut zip = ZipArchive::new(file).map_err(|e| map_zip_err(archive, e))?;
    zip.extract(dest).map_err(|e| map_zip_err(archive, e))?;
    debug!(archive = %archive.display(), dest = %dest.display(), "package extracted");
    Ok(())
}

/// Rewrite `target`, carrying over every entry except a prior manifest,
/// then appending `manifest` under the fixed entry name.
fn rewrite_with_manifest(target: &Path, manifest: &Path) -> Result<(), ArchiveError> {
    let source = File::open(target).map_err(|source| ArchiveError::Io {
        path: target.display().to_string(),
        source,
    })?;
    // Format validation happens here, before anything is written.
    let mut reader = ZipArchive::new(source).map_err(|e| map_zip_err(target, e))?;

    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let staging = tempfile::NamedTempFile::new_in(parent).map_err(|source| ArchiveError::Io {
        path: parent.display().to_string(),
        source,
    })?;
    let staging_file = staging.reopen().map_err(|source| ArchiveError::Io {
        path: staging.path().display().to_string(),
        source,
    })?;
    let mut writer = ZipWriter::new(staging_file);

    for index in 0..reader.len() {
        let entry = reader
            .by_index_raw(index)
            .map_err(|e| map_zip_err(target, e))?;
        if entry.name() == MANIFEST_ENTRY_NAME {
            debug!(entry = MANIFEST_ENTRY_NAME, "replacing existing manifest entry");
            continue;
        }
        writer
            .raw_copy_file(entry)
            .map_err(|e| map_zip_err(target, e))?;
    }

    writer
        .start_file(MANIFEST_ENTRY_NAME, SimpleFileOptions::default())
        .map_err(|e| map_zip_err(target, e))?;
    let mut manifest_file = File::open(manifest).map_err(|source| ArchiveError::Io {
        path: manifest.display().to_string(),
        source,
    })?;
    std::io::copy(&mut manifest_file, &mut writer).map_err(|source| ArchiveError::Io {
        path: manifest.display().to_string(),
        source,
    })?;
    writer.finish().map_err(|e| map_zip_err(target, e))?;

    staging
        .persist(target)
        .map_err(|e| ArchiveError::Io {
            path: target.display().to_string(),
            source: e.error,
        })?;
    Ok(())
}

fn map_zip_err(path: &Path, err: ZipError) -> ArchiveError {
    match err {
        ZipError::InvalidArchive(_) | ZipError::UnsupportedArchive(_) => {
            ArchiveError::UnsupportedFormat {
                path: path.display().to_string(),
            }
        }
        ZipError::Io(source) => ArchiveError::Io {
            path: path.display().to_string(),
            source,
        },
        other => ArchiveError::Update {
            path: path.display().to_string(),
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn make_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let file = File::create(path).expect("create zip");
        let mut writer = ZipWriter::new(file);
        for (name, data) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .expect("start entry");
            writer.write_all(data).expect("write entry");
        }
        writer.finish().expect("finish zip");
    }

    #[test]
    fn rejects_non_zip_archive() {
        let dir = tempfile::tempdir().expect("tempdir");
        let bogus = dir.path().join("package.dmapp");
        std::fs::write(&bogus, b"this is not a zip container").expect("write");
        let manifest = dir.path().join("sbom.json");
        std::fs::write(&manifest, b"{}").expect("write");

        let before = std::fs::read(&bogus).expect("read");
        let err = add_manifest(&bogus, &manifest, None).expect_err("should reject");
        assert!(matches!(err, ArchiveError::UnsupportedFormat { .. }));

        // No partial write on the rejected target.
        let after = std::fs::read(&bogus).expect("read");
        assert_eq!(before, after);
    }

    #[test]
    fn in_place_add_keeps_other_entries() {
        let dir = tempfile::tempdir().expect("tempdir");
        let package = dir.path().join("package.zip");
        make_zip(&package, &[("content/readme.txt", b"hello")]);
        let manifest = dir.path().join("manifest.spdx.json");
        std::fs::write(&manifest, br#"{"spdxVersion":"SPDX-2.3"}"#).expect("write");

        let result = add_manifest(&package, &manifest, None).expect("add");
        assert_eq!(result, package);

        let mut zip = ZipArchive::new(File::open(&package).expect("open")).expect("zip");
        assert_eq!(zip.len(), 2);
        assert!(zip.by_name("content/readme.txt").is_ok());
        assert!(zip.by_name(MANIFEST_ENTRY_NAME).is_ok());
    }

    #[test]
    fn extract_unpacks_all_entries() {
        let dir = tempfile::tempdir().expect("tempdir");
        let package = dir.path().join("package.zip");
        make_zip(
            &package,
            &[("a.txt", b"alpha" as &[u8]), ("sub/b.txt", b"beta")],
        );

        let dest = dir.path().join("unpacked");
        extract(&package, &dest).expect("extract");

        assert_eq!(std::fs::read(dest.join("a.txt")).expect("a"), b"alpha");
        assert_eq!(std::fs::read(dest.join("sub/b.txt")).expect("b"), b"beta");
    }

    #[test]
    fn extract_rejects_non_zip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let bogus = dir.path().join("nope.zip");
        std::fs::write(&bogus, b"plain text").expect("write");

        let err = extract(&bogus, &dir.path().join("out")).expect_err("should reject");
        assert!(matches!(err, ArchiveError::UnsupportedFormat { .. }));
    }
}
