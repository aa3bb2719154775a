mod cli;

use std::process::ExitCode;

use env_logger::Env;

fn main() -> ExitCode {
    // RUST_LOG overrides
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match cli::cli() {
        cli::CliRes::Ok => ExitCode::from(0),
        cli::CliRes::Err => ExitCode::from(1),
    }
}
