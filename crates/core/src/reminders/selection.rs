use super::{ListId, ReminderList};

/// What to do with an owner's selection pointer after a list is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionUpdate {
    /// The pointer did not reference the deleted list.
    Keep,
    /// Point at another of the owner's lists.
    Repoint(ListId),
    /// No lists remain; unset the pointer.
    Clear,
}

impl SelectionUpdate {
    /// The value to write, or `None` when nothing changes.
    pub fn target(self) -> Option<Option<ListId>> {
        match self {
            SelectionUpdate::Keep => None,
            SelectionUpdate::Repoint(id) => Some(Some(id)),
            SelectionUpdate::Clear => Some(None),
        }
    }
}

/// Decides how the selection moves once `deleted` is gone.
///
/// `remaining` is the owner's lists in listing order. The first one that is
/// not the deleted list becomes the new selection.
pub fn selection_after_delete(
    current: Option<ListId>,
    deleted: ListId,
    remaining: &[ReminderList],
) -> SelectionUpdate {
    if current != Some(deleted) {
        return SelectionUpdate::Keep;
    }

    remaining
        .iter()
        .find(|list| list.id != deleted)
        .map_or(SelectionUpdate::Clear, |list| {
            SelectionUpdate::Repoint(list.id)
        })
}
