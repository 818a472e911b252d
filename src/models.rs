//! Frontend Models
//!
//! Data structures matching the remote collection.

use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// `id` and `text` mirror the remote resource. `is_editing` is a client-only
/// flag; `GET` responses omit it, so it defaults to false on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    #[serde(default, rename = "isEditing")]
    pub is_editing: bool,
}

/// Creation payload; the server assigns the id.
#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    pub text: &'a str,
    #[serde(rename = "isEditing")]
    pub is_editing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_editing_flag() {
        let todo: Todo = serde_json::from_str(r#"{"id":1,"text":"a"}"#).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.text, "a");
        assert!(!todo.is_editing);
    }

    #[test]
    fn test_serialize_uses_camel_case_flag() {
        let todo = Todo { id: 2, text: "b".into(), is_editing: true };
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":2,"text":"b","isEditing":true}"#);
    }
}
