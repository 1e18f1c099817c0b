//! bompack-cli -- command-line interface for the bompack SBOM tool
//!
//! # Module Structure
//!
//! - [`cli`]: clap derive command tree and parse-time path validation
//! - [`commands`]: one handler per subcommand, plus [`commands::AppContext`]
//! - [`error`]: `CliError`
//! - [`logging`]: tracing-subscriber initialization
//! - [`output`]: text/JSON rendering (`OutputWriter`, `Render`)

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
