//! Task data structure.
//!
//! This module defines the `Task` struct that represents a single to-do entry.
//! Tasks carry no identifier of their own: they are addressed by their position
//! in the owning list.

use serde::Serialize;

/// Category label given to every new task.
pub const DEFAULT_CATEGORY: &str = "General";

/// A single to-do entry.
///
/// `is_complete` and `is_editing` are kept apart by the UI (conflicting
/// controls are disabled) but nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub text: String,
    pub is_complete: bool,
    pub is_editing: bool,
    pub category: String,
}

impl Task {
    /// Create an open, non-editing task in the default category.
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into(),
            is_complete: false,
            is_editing: false,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.is_complete);
        assert!(!task.is_editing);
        assert_eq!(task.category, "General");
    }

    #[test]
    fn test_task_serialises_camel_case() {
        let json = serde_json::to_value(Task::new("Walk dog")).unwrap();
        assert_eq!(json["text"], "Walk dog");
        assert_eq!(json["isComplete"], false);
        assert_eq!(json["isEditing"], false);
        assert_eq!(json["category"], "General");
    }
}
