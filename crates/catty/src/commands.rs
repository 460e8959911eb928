//! Command dispatch against a [`ReminderStore`].

use catty_core::reminders::SelectedList;
use catty_core::storage::{ReminderStore, Result};
use serde::Serialize;

use crate::cli::items::ItemsAction;
use crate::cli::lists::ListsAction;
use crate::cli::selected::SelectedAction;
use crate::cli::{Commands, OutputFormat};
use crate::output::json::{Created, Selection, Struck};
use crate::output::{format_output, pretty};

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Requested data, always printed.
    Data(String),
    /// Confirmation message, suppressed by `--quiet`.
    Notice(String),
}

fn render<T, F>(value: &T, format: OutputFormat, pretty: F) -> Output
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    Output::Data(format_output(value, format, pretty))
}

/// Runs a command for the store's owner.
pub fn execute<S: ReminderStore>(
    store: &mut S,
    command: Commands,
    format: OutputFormat,
) -> Result<Output> {
    match command {
        Commands::Lists(cmd) => execute_lists(store, cmd.action, format),
        Commands::Items(cmd) => execute_items(store, cmd.action, format),
        Commands::Selected(cmd) => execute_selected(store, cmd.action, format),
        Commands::Provision => Ok(Output::Notice("Database is provisioned.".to_string())),
    }
}

fn execute_lists<S: ReminderStore>(
    store: &mut S,
    action: ListsAction,
    format: OutputFormat,
) -> Result<Output> {
    match action {
        ListsAction::List => {
            let lists = store.get_lists()?;
            Ok(render(&lists, format, |lists| pretty::format_lists(lists)))
        }
        ListsAction::Create { name } => {
            let id = store.create_list(&name)?;
            Ok(render(&Created { id }, format, |created| {
                format!("Created list {}", created.id)
            }))
        }
        ListsAction::Get { id } => {
            let list = store.get_list(id)?;
            Ok(render(&list, format, pretty::format_list))
        }
        ListsAction::Rename { id, name } => {
            store.update_list_name(id, &name)?;
            Ok(Output::Notice(format!("Renamed list {id}")))
        }
        ListsAction::Delete { id } => {
            store.delete_list(id)?;
            Ok(Output::Notice(format!("Deleted list {id}")))
        }
        ListsAction::Clear => {
            store.delete_lists()?;
            Ok(Output::Notice("Deleted all lists".to_string()))
        }
    }
}

fn execute_items<S: ReminderStore>(
    store: &mut S,
    action: ItemsAction,
    format: OutputFormat,
) -> Result<Output> {
    match action {
        ItemsAction::List { list_id } => {
            let items = store.get_items(list_id)?;
            Ok(render(&items, format, |items| pretty::format_items(items)))
        }
        ItemsAction::Add {
            list_id,
            description,
        } => {
            let id = store.add_item(list_id, &description)?;
            Ok(render(&Created { id }, format, |created| {
                format!("Added item {}", created.id)
            }))
        }
        ItemsAction::Get { id } => {
            let item = store.get_item(id)?;
            Ok(render(&item, format, pretty::format_item))
        }
        ItemsAction::Strike { id } => {
            let completed = store.strike_item(id)?;
            Ok(render(&Struck { id, completed }, format, |struck| {
                let state = if struck.completed {
                    "completed"
                } else {
                    "reopened"
                };
                format!("Item {} {state}", struck.id)
            }))
        }
        ItemsAction::Edit { id, description } => {
            store.update_item_description(id, &description)?;
            Ok(Output::Notice(format!("Updated item {id}")))
        }
        ItemsAction::Delete { id } => {
            store.delete_item(id)?;
            Ok(Output::Notice(format!("Deleted item {id}")))
        }
    }
}

fn execute_selected<S: ReminderStore>(
    store: &mut S,
    action: SelectedAction,
    format: OutputFormat,
) -> Result<Output> {
    match action {
        SelectedAction::Show => {
            let selected = store.get_selected_list()?;
            Ok(render(&selected, format, |selected: &Option<SelectedList>| {
                pretty::format_selected(selected.as_ref())
            }))
        }
        SelectedAction::Id => {
            let list_id = store.get_selected_list_id()?;
            Ok(render(&Selection { list_id }, format, |selection| {
                selection
                    .list_id
                    .map_or_else(|| "none".to_string(), |id| id.to_string())
            }))
        }
        SelectedAction::Set { list_id } => {
            store.set_selected_list(Some(list_id))?;
            Ok(Output::Notice(format!("Selected list {list_id}")))
        }
        SelectedAction::Clear => {
            store.set_selected_list(None)?;
            Ok(Output::Notice("Cleared selection".to_string()))
        }
    }
}
