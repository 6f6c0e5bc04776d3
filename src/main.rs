use clap::Parser;

use crate::cli::Cli;
use play_art::run;

mod cli;

fn main() {
    let cli = Cli::parse();
    run(cli.command.into());
}
