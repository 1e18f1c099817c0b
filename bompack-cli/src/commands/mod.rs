//! Subcommand handlers
//!
//! One module per workflow. Handlers receive an [`AppContext`] built
//! once at startup and passed by reference; there is no ambient global
//! registry.

pub mod add;
pub mod generate;
pub mod generate_and_add;

use tokio_util::sync::CancellationToken;
use tracing::error;

use bompack_sbom::{EntityError, SpdxGenerator, SpdxRedactor};

/// Per-invocation collaborators, constructed explicitly in `main`.
pub struct AppContext {
    /// Manifest generator collaborator.
    pub generator: SpdxGenerator,
    /// Manifest redactor collaborator.
    pub redactor: SpdxRedactor,
    /// Cancellation signal, honored during redaction only.
    pub cancel: CancellationToken,
}

impl AppContext {
    /// Wire up the default collaborators.
    pub fn new(cancel: CancellationToken) -> Self {
        Self {
            generator: SpdxGenerator::default(),
            redactor: SpdxRedactor,
            cancel,
        }
    }
}

/// Log each structured generator error individually.
pub(crate) fn log_entity_errors(errors: &[EntityError]) {
    for e in errors {
        error!(entity = %e.path, reason = %e.reason, "sbom generation error");
    }
}
