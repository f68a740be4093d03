mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{extract, list, ExtractArgs, ListArgs};
use tracing::Level;

/// fluent-gen - extract builder-ready type information from TypeScript
#[derive(Parser, Debug)]
#[command(name = "fluent-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log analysis details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract property trees of declarations as JSON
    Extract(ExtractArgs),

    /// List the declarations of a file or directory
    List(ListArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::ERROR })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Extract(args) => extract(args, &cwd),
            Command::List(args) => list(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
