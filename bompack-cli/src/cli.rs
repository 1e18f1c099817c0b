//! CLI argument parsing using clap derive API
//!
//! Declarative command tree for the three workflows. Input-path
//! existence is enforced here, in value parsers, so subcommand handlers
//! only ever see validated paths; this is the one place the filesystem
//! is consulted during parsing.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use bompack_core::{FsEntry, PathKind};

/// bompack -- create a Software Bill of Materials (SBOM) for a directory
/// and add it to a zip-based package.
///
/// Use `bompack <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "bompack", version, about, long_about = None)]
pub struct Cli {
    /// Write out debug logging.
    #[arg(long, global = true, hide = true)]
    pub debug: bool,

    /// Minimum log level. Default is info; `--debug` wins when both are given.
    #[arg(long, global = true, value_enum)]
    pub minimum_log_level: Option<LogLevel>,

    /// Output format for command results.
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Log level selector for `--minimum-log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The tracing-subscriber directive for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an existing SBOM file to a package archive.
    Add(AddArgs),

    /// Generate a redacted SBOM file for a directory.
    Generate(GenerateArgs),

    /// Generate an SBOM for a directory and add it to a package archive.
    GenerateAndAdd(GenerateAndAddArgs),
}

// ---- add ----

/// Add the specified SBOM to a package archive.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// The SBOM file path.
    #[arg(short = 's', long, value_parser = existing_file)]
    pub sbom_file: PathBuf,

    /// The package file path to add the SBOM file to.
    #[arg(short = 'p', long, value_parser = existing_file)]
    pub package_file: PathBuf,

    /// The output directory to place the package with the SBOM file
    /// included. Without it, the package is updated in place.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

// ---- generate ----

/// Generate an SBOM file for the provided directory.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The directory containing the solution, or the solution file itself.
    #[arg(short = 's', long, value_parser = existing_file_or_dir)]
    pub solution_path: FsEntry,

    /// The name of the package the SBOM represents. Defaults to the
    /// solution directory name.
    #[arg(long, alias = "pn")]
    pub package_name: Option<String>,

    /// The version of the package the SBOM represents.
    #[arg(long, alias = "pv")]
    pub package_version: String,

    /// The supplier of the package the SBOM represents.
    #[arg(long, alias = "ps")]
    pub package_supplier: String,

    /// The directory where the SBOM file will be placed.
    #[arg(short = 'o', long)]
    pub output: PathBuf,
}

// ---- generate-and-add ----

/// Generate an SBOM file and add it to the provided package.
#[derive(Args, Debug)]
pub struct GenerateAndAddArgs {
    /// The directory containing the solution, or the solution file itself.
    #[arg(short = 's', long, value_parser = existing_file_or_dir)]
    pub solution_path: FsEntry,

    /// The package file path to add the SBOM file to.
    #[arg(short = 'p', long, value_parser = existing_file)]
    pub package_file: PathBuf,

    /// The name of the package the SBOM represents.
    #[arg(long, alias = "pn")]
    pub package_name: String,

    /// The version of the package the SBOM represents.
    #[arg(long, alias = "pv")]
    pub package_version: String,

    /// The supplier of the package the SBOM represents.
    #[arg(long, alias = "ps")]
    pub package_supplier: String,

    /// The output directory to place the package with the SBOM file
    /// included. Without it, the package is updated in place.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

fn existing_file(s: &str) -> Result<PathBuf, String> {
    FsEntry::resolve(Path::new(s), PathKind::File)
        .map(|entry| entry.path().to_path_buf())
        .map_err(|e| e.to_string())
}

fn existing_file_or_dir(s: &str) -> Result<FsEntry, String> {
    FsEntry::resolve(Path::new(s), PathKind::Any).map_err(|e| e.to_string())
}
