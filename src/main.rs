mod cli;
mod config;
mod convert;
mod extract_cmd;
mod logging;
mod notify;
mod run_cmd;
mod source;
mod stage;

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
        Command::Run(args) => run_cmd::run(args),
        Command::Extract(args) => extract_cmd::run(args),
    }
}
