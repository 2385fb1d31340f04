pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "rentquote",
    about = "Rentquote operator CLI",
    long_about = "Compute rental quotations offline, inspect the vehicle catalog, and review effective configuration.",
    after_help = "Examples:\n  rentquote quote --pickup FCO --drop-off MXP --start 2025-07-10T10:00 --end 2025-07-13T12:00\n  rentquote catalog --location FCO\n  rentquote config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Run the pricing engine against the catalog and print the offers")]
    Quote(commands::quote::QuoteArgs),
    #[command(about = "List the vehicle groups in the catalog")]
    Catalog {
        #[arg(long, help = "Catalog JSON file (defaults to the configured path)")]
        catalog: Option<PathBuf>,
        #[arg(long, help = "Only show groups served from this location code")]
        location: Option<String>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Quote(args) => commands::quote::run(args),
        Command::Catalog { catalog, location, json } => {
            commands::catalog::run(catalog.as_deref(), location.as_deref(), json)
        }
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
