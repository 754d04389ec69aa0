//! CarryStation CLI

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use carrystation_app::{config, observability};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    config::load_dotenv();

    let cli = cli::Cli::parse();

    if let Err(error) = observability::init(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, so stderr is the only channel left"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");

            #[expect(
                clippy::print_stderr,
                reason = "command errors are reported to the user, not only the log"
            )]
            {
                eprintln!("{message}");
            }

            ExitCode::FAILURE
        }
    }
}
