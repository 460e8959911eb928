//! CLI command definitions.

pub mod items;
pub mod lists;
pub mod selected;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Manage reminder lists stored in a local SQLite database.
#[derive(Debug, Parser)]
#[command(name = "catty")]
#[command(version, about = "Manage reminder lists", long_about = None)]
pub struct Cli {
    /// Owner every command acts for.
    #[arg(long, env = "CATTY_OWNER")]
    pub owner: String,

    /// Directory holding database files (overrides CATTY_DATA_DIR).
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Database name (overrides CATTY_DATABASE).
    #[arg(long)]
    pub database: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reminder list management.
    Lists(lists::ListsCommand),
    /// Reminder item management.
    Items(items::ItemsCommand),
    /// Selected list management.
    Selected(selected::SelectedCommand),
    /// Create the database and its tables if they are missing.
    Provision,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_global_options() {
        let cli = parse(&[
            "catty",
            "--owner",
            "alice",
            "--data-dir",
            "/tmp",
            "--database",
            "reminders",
            "--format",
            "json",
            "--quiet",
            "provision",
        ]);

        assert_eq!(cli.owner, "alice");
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp")));
        assert_eq!(cli.database.as_deref(), Some("reminders"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Provision));
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["catty", "--owner", "alice", "provision"]);

        assert_eq!(cli.data_dir, None);
        assert_eq!(cli.database, None);
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_lists_rename() {
        let cli = parse(&["catty", "--owner", "alice", "lists", "rename", "3", "Chores"]);

        match cli.command {
            Commands::Lists(cmd) => assert!(matches!(
                cmd.action,
                lists::ListsAction::Rename { id: 3, ref name } if name == "Chores"
            )),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_items_add() {
        let cli = parse(&["catty", "--owner", "alice", "items", "add", "1", "Buy milk"]);

        match cli.command {
            Commands::Items(cmd) => assert!(matches!(
                cmd.action,
                items::ItemsAction::Add { list_id: 1, ref description } if description == "Buy milk"
            )),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_selected_set() {
        let cli = parse(&["catty", "--owner", "alice", "selected", "set", "2"]);

        match cli.command {
            Commands::Selected(cmd) => {
                assert!(matches!(cmd.action, selected::SelectedAction::Set { list_id: 2 }))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let result = Cli::try_parse_from(["catty", "--owner", "alice", "lists", "get", "abc"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result =
            Cli::try_parse_from(["catty", "--owner", "alice", "--format", "xml", "provision"]);

        assert!(result.is_err());
    }
}
