mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{score, states, summary, top};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Score(args) => score::run(&cli, args),
        Commands::Top(args) => top::run(&cli, args),
        Commands::States(args) => states::run(&cli, args),
        Commands::Summary(args) => summary::run(&cli, args),
    }
}

/// `-v` raises the default level to info, `-vv` to debug; `RUST_LOG` wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> { run() }
