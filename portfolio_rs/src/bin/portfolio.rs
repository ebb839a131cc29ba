use std::process::ExitCode;

use clap::Parser;
use portfolio::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::init_logging(&cli.log_level);

    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[portfolio][error] {e:#}");
            ExitCode::FAILURE
        }
    }
}
