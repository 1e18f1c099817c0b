//! `bompack generate-and-add` command handler
//!
//! Pipeline: workspace -> unzip the package into a workspace
//! subdirectory (so the packaged binaries are scanned too) -> normalize
//! scan root -> generate one merged manifest over both scopes -> splice
//! the unredacted manifest into the package. No redaction in this path;
//! the in-archive manifest keeps its file inventory.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use bompack_core::TempWorkspace;
use bompack_sbom::{ManifestError, ManifestGenerator, PackageMetadata, ScanRoots};

use crate::cli::GenerateAndAddArgs;
use crate::commands::{AppContext, log_entity_errors};
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `generate-and-add` command.
pub async fn execute(
    args: GenerateAndAddArgs,
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
    args: GenerateAndAddArgs,
    ctx: &AppContext,
    writer: &OutputWriter,
    workspace: &TempWorkspace,
) -> Result<(), CliError> {
    let unzipped = workspace.subdir("package")?;
    bompack_core::extract(&args.package_file, &unzipped)?;

    let solution_dir = args.solution_path.as_directory();
    // All three metadata fields are mandatory here; no defaulting.
    let metadata = PackageMetadata::new(
        args.package_name,
        args.package_version,
        args.package_supplier,
    );

    let manifest = match ctx
        .generator
        .generate(
            &ScanRoots::with_component(solution_dir, unzipped),
            metadata,
            workspace.path(),
        )
        .await
    {
        Ok(path) => path,
        Err(ManifestError::Generation(errors)) => {
            log_entity_errors(&errors);
            return Err(CliError::GenerationFailed);
        }
        Err(e) => return Err(e.into()),
    };

    let package =
        bompack_core::add_manifest(&args.package_file, &manifest, args.output.as_deref())?;

    writer.render(&GenerateAndAddReport {
        package: package.display().to_string(),
    })
}

/// Result payload of a successful `generate-and-add`.
#[derive(Serialize)]
pub struct GenerateAndAddReport {
    /// Path of the archive now carrying the manifest entry.
    pub package: String,
}

impl Render for GenerateAndAddReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            w,
            "{} SBOM generated and added to package: {}",
            "✓".green(),
            self.package.bold()
        )
    }
}
