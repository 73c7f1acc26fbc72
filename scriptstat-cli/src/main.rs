//! scriptstat command-line entry point

use clap::Parser;
use scriptstat_cli::commands::Commands;

/// Classify every character of a text into language and structural buckets
#[derive(Debug, Parser)]
#[command(name = "scriptstat", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
