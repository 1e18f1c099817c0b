//! bompack-core -- shared plumbing for the bompack SBOM tool
//!
//! # Module Structure
//!
//! - [`error`]: Error taxonomy (`BompackError` and domain enums)
//! - [`fs`]: Path validation at the argument boundary (`FsEntry`, `PathKind`)
//! - [`workspace`]: Temporary workspace lifecycle (`TempWorkspace`)
//! - [`archive`]: Package archive mutation and extraction

pub mod archive;
pub mod error;
pub mod fs;
pub mod workspace;

// --- Public API Re-exports ---

pub use archive::{MANIFEST_ENTRY_NAME, add_manifest, extract};
pub use error::{ArchiveError, BompackError, FsError, PathKind, SbomError, WorkspaceError};
pub use fs::FsEntry;
pub use workspace::TempWorkspace;
