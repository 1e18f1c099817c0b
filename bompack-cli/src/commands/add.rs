//! `bompack add` command handler

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::cli::AddArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `add` command.
///
/// Both input paths were validated at parse time; no temporary workspace
/// is needed since nothing is generated.
pub async fn execute(args: AddArgs, writer: &OutputWriter) -> Result<(), CliError> {
    let package =
        bompack_core::add_manifest(&args.package_file, &args.sbom_file, args.output.as_deref())?;

    writer.render(&AddReport {
        package: package.display().to_string(),
    })
}

/// Result payload of a successful `add`.
#[derive(Serialize)]
pub struct AddReport {
    /// Path of the archive now carrying the manifest entry.
    pub package: String,
}

impl Render for AddReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "{} SBOM added to package: {}", "✓".green(), self.package.bold())
    }
}
