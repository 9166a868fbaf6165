use clap::Parser;

use pocketdex::cli::Cli;
use pocketdex::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref());
    ui::runtime::run(&cli)
}
