use clap::Parser;
use launches::cli_app::{handle_command, Cli};
use launches::logging::init_logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    match handle_command(cli, std::io::stdin(), std::io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
