//! Pretty output formatting.

use catty_core::reminders::{ReminderItem, ReminderList, SelectedList};

fn checkbox(item: &ReminderItem) -> &'static str {
    if item.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Format a list for display.
pub fn format_list(list: &ReminderList) -> String {
    format!("{}\n  ID: {}", list.name, list.id)
}

/// Format lists for display.
pub fn format_lists(lists: &[ReminderList]) -> String {
    if lists.is_empty() {
        return "No lists found.".to_string();
    }
    let mut output = format!("LISTS ({})\n", lists.len());
    output.push_str(&"-".repeat(40));
    for list in lists {
        output.push_str(&format!("\n{}", format_list(list)));
        output.push('\n');
    }
    output
}

/// Format an item for display.
pub fn format_item(item: &ReminderItem) -> String {
    format!(
        "{} {}\n  ID: {}\n  List: {}",
        checkbox(item),
        item.description,
        item.id,
        item.list_id
    )
}

/// Format items for display.
pub fn format_items(items: &[ReminderItem]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

/// Format the selected list with a one-line summary per item.
pub fn format_selected(selected: Option<&SelectedList>) -> String {
    let Some(selected) = selected else {
        return "No list selected.".to_string();
    };
    let mut output = format!(
        "{} ({} of {} pending)\n  ID: {}",
        selected.name,
        selected.pending(),
        selected.items.len(),
        selected.id
    );
    for item in &selected.items {
        output.push_str(&format!(
            "\n  {} {} (#{})",
            checkbox(item),
            item.description,
            item.id
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lists_empty() {
        assert_eq!(format_lists(&[]), "No lists found.");
    }

    #[test]
    fn test_format_lists() {
        let lists = vec![
            ReminderList::new(1, "alice", "Groceries"),
            ReminderList::new(2, "alice", "Chores"),
        ];

        let output = format_lists(&lists);

        assert!(output.starts_with("LISTS (2)\n"));
        assert!(output.contains("Groceries\n  ID: 1"));
        assert!(output.contains("Chores\n  ID: 2"));
    }

    #[test]
    fn test_format_item_checkbox() {
        let open = ReminderItem::new(1, 3, "Milk");
        let done = ReminderItem::new(2, 3, "Eggs").with_completed(true);

        assert_eq!(format_item(&open), "[ ] Milk\n  ID: 1\n  List: 3");
        assert!(format_item(&done).starts_with("[x] Eggs"));
    }

    #[test]
    fn test_format_selected_none() {
        assert_eq!(format_selected(None), "No list selected.");
    }

    #[test]
    fn test_format_selected() {
        let selected = SelectedList::from_parts(
            ReminderList::new(3, "alice", "Groceries"),
            vec![
                ReminderItem::new(1, 3, "Milk").with_completed(true),
                ReminderItem::new(2, 3, "Eggs"),
            ],
        );

        assert_eq!(
            format_selected(Some(&selected)),
            "Groceries (1 of 2 pending)\n  ID: 3\n  [x] Milk (#1)\n  [ ] Eggs (#2)"
        );
    }
}
