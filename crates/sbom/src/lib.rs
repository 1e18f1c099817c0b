//! bompack-sbom -- manifest generation and redaction
//!
//! # Module Structure
//!
//! - [`error`]: Domain error types (`ManifestError`, `EntityError`)
//! - [`metadata`]: Descriptive package metadata (`PackageMetadata`)
//! - [`spdx`]: SPDX 2.3 JSON document model
//! - [`generate`]: Generator seam and built-in implementation
//!   (`ManifestGenerator`, `SpdxGenerator`, `ScanRoots`)
//! - [`redact`]: Redactor seam and built-in implementation
//!   (`ManifestRedactor`, `SpdxRedactor`)
//!
//! # Flow
//!
//! ```text
//! scan roots --> SpdxGenerator --> manifest.spdx.json
//!                                       |
//!                      +----------------+----------------+
//!                      |                                 |
//!                SpdxRedactor                   archive mutation
//!                      |                         (bompack-core)
//!                  sbom.json                     sbom.json entry
//! ```

pub mod error;
pub mod generate;
pub mod metadata;
pub mod redact;
pub mod spdx;
mod util;

// --- Public API Re-exports ---

pub use error::{EntityError, ManifestError};
pub use generate::{GENERATED_MANIFEST_NAME, ManifestGenerator, ScanRoots, SpdxGenerator};
pub use metadata::PackageMetadata;
pub use redact::{ManifestRedactor, REDACTED_MANIFEST_NAME, SpdxRedactor};
