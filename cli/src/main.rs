mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};
use commands::{attributes, breaks, render};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Commands::Attributes => attributes::run(&cli),
        Commands::Breaks(args) => breaks::run(&cli, args),
        Commands::Render(args) => render::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
