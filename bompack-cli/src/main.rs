use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::error;

use bompack_cli::cli::{Cli, Commands};
use bompack_cli::commands::{self, AppContext};
use bompack_cli::logging;
use bompack_cli::output::OutputWriter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.debug, cli.minimum_log_level) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    // Ctrl-C cancels cooperatively; only the redaction step checks it.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let ctx = AppContext::new(cancel);
    let writer = OutputWriter::new(cli.format);

    let result = match cli.command {
        Commands::Add(args) => commands::add::execute(args, &writer).await,
        Commands::Generate(args) => commands::generate::execute(args, &ctx, &writer).await,
        Commands::GenerateAndAdd(args) => {
            commands::generate_and_add::execute(args, &ctx, &writer).await
        }
    };

    if let Err(e) = result {
        error!(error = %e, "command failed");
        std::process::exit(1);
    }
}
