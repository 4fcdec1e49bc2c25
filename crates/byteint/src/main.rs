//! byteint: radix conversion and big-integer arithmetic from the shell.

use std::process::ExitCode;

use byteint_lib::{app, config, errors};
use tracing::Level;

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::from(errors::exit_codes::SUCCESS),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(errors::exit_code(&err))
        }
    }
}
