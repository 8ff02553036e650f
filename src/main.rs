mod repl;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// don't print the value of the last statement
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// run a file
    Run {
        #[arg(name = "FILE")]
        file: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Run { file }) => run_file(&file, cli.quiet),
        None => repl::start(cli.quiet),
    }
}

fn run_file(file: &Path, quiet: bool) -> Result<()> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    tracing::info!(file = %file.display(), bytes = source.len(), "running file");

    let rendered = hanlang::execute(&source)
        .with_context(|| format!("failed to run {}", file.display()))?;
    if !quiet && !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
