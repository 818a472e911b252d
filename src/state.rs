//! List State Transitions
//!
//! Pure helpers over the in-memory todo list. The list order is arrival
//! order: initial load order, then append order for creations.

use crate::models::Todo;

/// Append a freshly created item.
pub fn push_todo(list: &mut Vec<Todo>, todo: Todo) {
    list.push(todo);
}

/// Remove an item by id, keeping the order of the rest.
pub fn remove_todo(list: &mut Vec<Todo>, id: u32) {
    list.retain(|todo| todo.id != id);
}

/// Replace the item with the same id as `updated`.
pub fn replace_todo(list: &mut Vec<Todo>, updated: Todo) {
    list.iter_mut()
        .find(|todo| todo.id == updated.id)
        .map(|todo| *todo = updated);
}

/// Flip the editing flag for one item.
///
/// Returns the item's current text when it just entered edit mode, for
/// seeding the edit buffer. `None` on exit or unknown id.
pub fn toggle_edit(list: &mut Vec<Todo>, id: u32) -> Option<String> {
    let todo = list.iter_mut().find(|todo| todo.id == id)?;
    todo.is_editing = !todo.is_editing;
    todo.is_editing.then(|| todo.text.clone())
}

/// Drop the editing flag without touching the text.
pub fn clear_editing(list: &mut Vec<Todo>, id: u32) {
    list.iter_mut()
        .find(|todo| todo.id == id)
        .map(|todo| todo.is_editing = false);
}

pub fn find_todo(list: &[Todo], id: u32) -> Option<&Todo> {
    list.iter().find(|todo| todo.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, text: &str) -> Todo {
        Todo { id, text: text.to_string(), is_editing: false }
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut list = vec![make_todo(1, "a"), make_todo(2, "b"), make_todo(3, "c")];
        remove_todo(&mut list, 2);
        let ids: Vec<u32> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_toggle_edit_seeds_buffer_on_entry_only() {
        let mut list = vec![make_todo(1, "a"), make_todo(2, "b")];

        let seed = toggle_edit(&mut list, 2);
        assert_eq!(seed.as_deref(), Some("b"));
        assert!(list[1].is_editing);
        // Only item 2 is affected
        assert!(!list[0].is_editing);

        let seed = toggle_edit(&mut list, 2);
        assert_eq!(seed, None);
        assert!(!list[1].is_editing);
    }

    #[test]
    fn test_toggle_edit_unknown_id() {
        let mut list = vec![make_todo(1, "a")];
        assert_eq!(toggle_edit(&mut list, 99), None);
        assert!(!list[0].is_editing);
    }

    #[test]
    fn test_replace_only_touches_matching_id() {
        let mut list = vec![make_todo(1, "a"), make_todo(2, "b")];
        replace_todo(&mut list, make_todo(2, "b2"));
        assert_eq!(list[0].text, "a");
        assert_eq!(list[1].text, "b2");
    }

    #[test]
    fn test_clear_editing() {
        let mut list = vec![make_todo(1, "a")];
        toggle_edit(&mut list, 1);
        clear_editing(&mut list, 1);
        assert!(!list[0].is_editing);
        assert_eq!(list[0].text, "a");
    }
}
