//! nutshell CLI entry point

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use nutshell::cli::{init_logging, run_paper_command, Cli, EXIT_ERROR};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(command) => run_paper_command(command.into_options()).await,
        None => {
            eprintln!("{}", Cli::command().render_help());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
