mod generate;
pub use generate::GenerateCommand;

use anyhow::Result;
use clap::Parser;

/// Parse and execute CLI commands from command-line arguments.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(cmd) => cmd.run(),
    }
}

#[derive(Parser, Debug)]
#[command(name = "stackage")]
#[command(about = "Stackage model generator - translates ORM metadata into model classes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate model-class files from a metadata dump
    Generate(GenerateCommand),
}
