use std::{
    io::{BufWriter, stdin, stdout},
    path::PathBuf,
};

use anyhow::Result;
use bank_console::{
    app,
    common::config::{Config, ListFormat},
    domain::registry::DEFAULT_CAPACITY,
};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Console bank: open accounts, deposit, withdraw and list balances.
#[derive(Parser)]
#[command(name = "bank_console")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum number of accounts the registry holds
    #[arg(long, default_value_t = DEFAULT_CAPACITY, conflicts_with = "unbounded")]
    capacity: usize,

    /// Lift the account cap entirely
    #[arg(long)]
    unbounded: bool,

    /// How account listings are printed
    #[arg(long, default_value = "text")]
    format: FormatArg,

    /// Run commands from a CSV script instead of the interactive menu
    #[arg(long)]
    batch: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Csv,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            capacity: (!cli.unbounded).then_some(cli.capacity),
            list_format: match cli.format {
                FormatArg::Text => ListFormat::Text,
                FormatArg::Csv => ListFormat::Csv,
            },
            batch: cli.batch,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(Cli::parse());

    let stdin = stdin();
    let stdout = stdout();
    let output = BufWriter::new(stdout.lock());
    app::run(&config, stdin.lock(), output)?;

    Ok(())
}
