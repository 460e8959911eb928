//! catty CLI entry point.

use anyhow::{Context, Result};
use catty::cli::Cli;
use catty::commands::{execute, Output};
use catty::{Config, SqliteStorage};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catty=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_overrides(cli.data_dir, cli.database);
    let connection = config.connection();

    let mut store = SqliteStorage::connect(cli.owner, &connection)
        .with_context(|| format!("failed to open {}", connection.database_path().display()))?;

    let result = execute(&mut store, cli.command, cli.format);
    store.close().context("failed to close database")?;

    match result? {
        Output::Data(data) => println!("{data}"),
        Output::Notice(notice) => {
            if !cli.quiet {
                println!("{notice}");
            }
        }
    }

    Ok(())
}
