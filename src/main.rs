use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use wordmask::cli::{self, PatternArgs};
use wordmask::config::Config;
use wordmask::registry::StrategyRegistry;

#[derive(Debug, Parser)]
#[command(name = "wordmask", version, about = "Mask words and phrases in text")]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Config file. Defaults to `.wordmask/config.yml` in the current directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Redact the input and print the result.
    Redact {
        #[command(flatten)]
        args: PatternArgs,

        /// Print a JSON report instead of the redacted text.
        #[arg(long)]
        json: bool,
    },
    /// List every match found in the input.
    Scan {
        #[command(flatten)]
        args: PatternArgs,

        #[arg(long)]
        json: bool,
    },
    /// List the available matching strategies.
    Strategies {
        #[arg(long)]
        json: bool,
    },
    /// Check that every strategy finds the same spans as the brute-force scanner.
    Verify {
        #[command(flatten)]
        args: PatternArgs,
    },
}

fn main() -> Result<()> {
    let opts = Cli::parse();

    let level = if opts.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &opts.config {
        Some(path) if !path.exists() => bail!("config file not found: {}", path.display()),
        Some(path) => Config::load_from(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Config::load_project(&cwd)?
        }
    };
    let registry = StrategyRegistry::with_defaults();

    match opts.command {
        Command::Redact { args, json } => cli::redact::run(&args, json, &config, &registry)?,
        Command::Scan { args, json } => cli::scan::run(&args, json, &config, &registry)?,
        Command::Strategies { json } => cli::strategies::run(json, &registry)?,
        Command::Verify { args } => cli::verify::run(&args, &config, &registry)?,
    }
    Ok(())
}
