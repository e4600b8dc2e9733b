//! Destini command-line tool.

use clap::Parser;
use destini::DestiniConfig;
use destini::cli::{Cli, Commands, handle_validate_command, handle_walk_command};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DestiniConfig::load(cli.config.as_deref())?;
    destini::init_tracing(config.log().filter(), *config.log().format())?;

    tracing::info!(command = ?cli.command, "Starting destini");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Validate {
            path,
            strict,
            format,
            quiet,
        } => {
            let outcome =
                handle_validate_command(path, config.validation(), format, strict, quiet, &mut out)?;
            Ok(ExitCode::from(outcome.exit_code(strict)))
        }
        Commands::Walk {
            path,
            choices,
            restart,
        } => {
            let summary = handle_walk_command(
                path,
                config.validation().policy(),
                &choices,
                restart,
                &mut out,
            )?;
            tracing::info!(
                final_node = %summary.final_node,
                ended = summary.ended,
                "Walk finished"
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
