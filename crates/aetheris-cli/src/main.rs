//! Aetheris CLI - convert Java and Kotlin sources into class diagrams

mod cli;
mod logging;
mod serve;

use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Cli::parse();

    if let Err(e) = logging::init_logging(args.log_level.as_deref(), args.log_format) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    cli::run(args)
}
