mod list;
mod text;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a sequence operation to a comma-separated list of integers.
    List(list::List),
    /// Split text into lines or words.
    Text(text::Text),
}

fn main() -> anyhow::Result<()> {
    // logs go to stderr; stdout only carries results
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List(list) => {
            list.run()?;
        }
        Commands::Text(text) => {
            text.run()?;
        }
    }
    Ok(())
}
