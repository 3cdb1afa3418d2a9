mod cli;
mod config;
mod convert;
mod logging;
mod report;
mod spectrum_cmd;
mod sweep_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Sweep(args) => sweep_cmd::run(args),
        Command::Spectrum(args) => spectrum_cmd::run(args),
    }
}
