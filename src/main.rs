use clap::Parser;
use std::process::ExitCode;

use dependalabels::cli::Cli;
use dependalabels::utils::error::report_error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.execute().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}
