mod cli;
mod config;
mod export;
mod logging;
mod run;

use std::process;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run::run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
