//! Maintain the victims list stored as a JSON file.
//!
//! `victims add`, `victims list`, and `victims remove` each load the whole
//! file, perform one operation, and rewrite the file when something changed.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, CommandFactory, Parser, Subcommand};
use victims::core::record::RecordInput;
use victims::io::config::{DEFAULT_CONFIG_PATH, load_config};
use victims::{cli, exit_codes, logging};

#[derive(Parser)]
#[command(name = "victims", version, about = "Manage shooting victims data")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Victims JSON file (overrides `data_path` from the config).
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new victim.
    Add(RecordArgs),
    /// List all victims, most recent first.
    List,
    /// Remove a victim by exact match.
    Remove(RecordArgs),
}

#[derive(Args)]
struct RecordArgs {
    /// FIRSTNAME [MIDDLENAME] LASTNAME AGE DATE (date as YYYY-MM-DD).
    #[arg(
        required = true,
        num_args = 4..=5,
        value_name = "FIELD",
        allow_negative_numbers = true
    )]
    fields: Vec<String>,
}

impl RecordArgs {
    fn into_input(self) -> Result<RecordInput> {
        match RecordInput::from_positionals(&self.fields) {
            Some(input) => Ok(input),
            None => bail!(
                "expected FIRSTNAME [MIDDLENAME] LASTNAME AGE DATE, got {} values",
                self.fields.len()
            ),
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_codes::FATAL);
    }
}

fn run() -> Result<()> {
    let args = Cli::parse();
    let Some(command) = args.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = load_config(&args.config)?.with_data_path(args.file)?;
    let data_path = config.data_path.as_path();
    match command {
        Command::Add(fields) => cli::add(data_path, &fields.into_input()?),
        Command::List => cli::list(data_path),
        Command::Remove(fields) => cli::remove(data_path, &fields.into_input()?),
    }
}
