//! `bompack generate` command handler
//!
//! Pipeline: workspace -> normalize scan root -> metadata (name defaults
//! to the scan-root directory name) -> generate into the workspace ->
//! redact into the output directory. The unredacted manifest never
//! leaves the workspace.

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use tracing::info;

use bompack_core::TempWorkspace;
use bompack_sbom::{
    ManifestError, ManifestGenerator, ManifestRedactor, PackageMetadata, ScanRoots,
};

use crate::cli::GenerateArgs;
use crate::commands::{AppContext, log_entity_errors};
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `generate` command.
pub async fn execute(
    args: GenerateArgs,
    ctx: &AppContext,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let workspace = TempWorkspace::create()?;
    let result = run(args, ctx, writer, &workspace).await;
    // Cleanup runs exactly once, on success and failure alike.
    workspace.dispose();
    result
}

async fn run(
    args: GenerateArgs,
    ctx: &AppContext,
    writer: &OutputWriter,
    workspace: &TempWorkspace,
) -> Result<(), CliError> {
    // File inputs are substituted by their containing directory before
    // the name default is computed.
    let solution_dir = args.solution_path.as_directory();
    let package_name = args
        .package_name
        .unwrap_or_else(|| directory_name(&solution_dir));
    let metadata = PackageMetadata::new(package_name, args.package_version, args.package_supplier);

    let manifest = match ctx
        .generator
        .generate(&ScanRoots::single(solution_dir), metadata, workspace.path())
        .await
    {
        Ok(path) => path,
        Err(ManifestError::Generation(errors)) => {
            log_entity_errors(&errors);
            return Err(CliError::GenerationFailed);
        }
        Err(e) => return Err(e.into()),
    };

    let redacted = ctx
        .redactor
        .redact(&manifest, &args.output, &ctx.cancel)
        .await?;
    info!(path = %redacted.display(), "SBOM file created");

    writer.render(&GenerateReport {
        manifest: redacted.display().to_string(),
    })
}

fn directory_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_owned())
}

/// Result payload of a successful `generate`.
#[derive(Serialize)]
pub struct GenerateReport {
    /// Path of the redacted standalone manifest.
    pub manifest: String,
}

impl Render for GenerateReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "{} SBOM file created at: {}", "✓".green(), self.manifest.bold())
    }
}
