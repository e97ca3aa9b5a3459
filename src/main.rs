mod cli;
mod config;
mod convert;
mod logging;
mod sequence_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let lines = match cli.command {
        Command::Steps(args) => sequence_cmd::steps(&args, &config.sequence)?,
        Command::Range(args) => sequence_cmd::range(&args, &config.sequence)?,
    };
    sequence_cmd::print_lines(&lines)
}
