//! In-memory task list state.
//!
//! `TaskListStore` owns the task collection, the pending draft text and the
//! theme flag. The presentation layer reads from it and forwards every user
//! action as a single method call, so each call is one complete state
//! transition.

use log::{debug, warn};

use crate::error::{Result, StoreError};
use crate::task::Task;

/// Owned task list state with explicit mutation methods.
#[derive(Debug, Clone)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    draft_input: String,
    dark_mode: bool,
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListStore {
    /// Create an empty store with dark mode on.
    pub fn new() -> Self {
        Self::with_dark_mode(true)
    }

    /// Create an empty store with the given initial theme.
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        TaskListStore {
            tasks: Vec::new(),
            draft_input: String::new(),
            dark_mode,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by position.
    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn draft_input(&self) -> &str {
        &self.draft_input
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Number of tasks marked complete.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_complete).count()
    }

    /// Percentage of complete tasks in `[0, 100]`, or 0 for an empty list.
    pub fn progress(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.tasks.len() as f64 * 100.0
    }

    /// Replace the draft text. No validation.
    pub fn set_draft_input(&mut self, text: impl Into<String>) {
        self.draft_input = text.into();
    }

    /// Append the draft as a new task and clear it.
    ///
    /// A blank or whitespace-only draft is ignored and left in place.
    /// Returns whether a task was added.
    pub fn add_task(&mut self) -> bool {
        if self.draft_input.trim().is_empty() {
            return false;
        }
        let text = std::mem::take(&mut self.draft_input);
        self.tasks.push(Task::new(text));
        debug!("added task #{}", self.tasks.len() - 1);
        true
    }

    /// Flip the completion flag of one task.
    pub fn toggle_complete(&mut self, index: usize) -> Result<()> {
        let task = self.task_mut(index)?;
        task.is_complete = !task.is_complete;
        debug!("task #{} complete={}", index, task.is_complete);
        Ok(())
    }

    /// Put one task in edit mode. Other tasks keep their edit state.
    pub fn begin_edit(&mut self, index: usize) -> Result<()> {
        self.task_mut(index)?.is_editing = true;
        debug!("task #{} editing", index);
        Ok(())
    }

    /// Overwrite a task's text as it is typed, whatever its edit state.
    pub fn update_edit_text(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        self.task_mut(index)?.text = text.into();
        Ok(())
    }

    /// Store the final text and leave edit mode.
    pub fn commit_edit(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let task = self.task_mut(index)?;
        task.text = text.into();
        task.is_editing = false;
        debug!("task #{} saved", index);
        Ok(())
    }

    /// Remove a task. Every later task moves down one position.
    pub fn delete_task(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        let removed = self.tasks.remove(index);
        debug!("deleted task #{} ({} left)", index, self.tasks.len());
        Ok(removed)
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        debug!("dark_mode={}", self.dark_mode);
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            let err = StoreError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            };
            warn!("{err}");
            Err(err)
        }
    }

    fn task_mut(&mut self, index: usize) -> Result<&mut Task> {
        self.check_index(index)?;
        Ok(&mut self.tasks[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(texts: &[&str]) -> TaskListStore {
        let mut store = TaskListStore::new();
        for text in texts {
            store.set_draft_input(*text);
            assert!(store.add_task());
        }
        store
    }

    fn texts(store: &TaskListStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_new_store_is_empty_and_dark() {
        let store = TaskListStore::new();
        assert!(store.is_empty());
        assert_eq!(store.draft_input(), "");
        assert!(store.dark_mode());
        assert!(!TaskListStore::with_dark_mode(false).dark_mode());
    }

    #[test]
    fn test_blank_draft_is_ignored() {
        let mut store = TaskListStore::new();
        store.set_draft_input("");
        assert!(!store.add_task());
        store.set_draft_input("   \t ");
        assert!(!store.add_task());
        assert!(store.is_empty());
        assert_eq!(store.draft_input(), "   \t ");
    }

    #[test]
    fn test_add_task_appends_and_clears_draft() {
        let mut store = TaskListStore::new();
        store.set_draft_input("Buy milk");
        assert!(store.add_task());

        assert_eq!(store.tasks(), &[Task::new("Buy milk")]);
        assert_eq!(store.tasks()[0].category, "General");
        assert_eq!(store.draft_input(), "");
    }

    #[test]
    fn test_add_task_keeps_surrounding_whitespace() {
        let mut store = TaskListStore::new();
        store.set_draft_input("  padded ");
        store.add_task();
        assert_eq!(store.tasks()[0].text, "  padded ");
    }

    #[test]
    fn test_tasks_keep_insertion_order() {
        let store = store_with(&["one", "two", "three"]);
        assert_eq!(texts(&store), ["one", "two", "three"]);
    }

    #[test]
    fn test_toggle_complete_flips_only_target() {
        let mut store = store_with(&["a", "b", "c"]);
        store.toggle_complete(1).unwrap();
        let flags: Vec<bool> = store.tasks().iter().map(|t| t.is_complete).collect();
        assert_eq!(flags, [false, true, false]);

        store.toggle_complete(1).unwrap();
        assert!(store.tasks().iter().all(|t| !t.is_complete));
    }

    #[test]
    fn test_progress() {
        let mut store = TaskListStore::new();
        assert_eq!(store.progress(), 0.0);

        store.set_draft_input("a");
        store.add_task();
        store.set_draft_input("b");
        store.add_task();
        store.toggle_complete(0).unwrap();
        assert_eq!(store.progress(), 50.0);
        assert_eq!(store.completed_count(), 1);

        store.toggle_complete(1).unwrap();
        assert_eq!(store.progress(), 100.0);
    }

    #[test]
    fn test_progress_thirds() {
        let mut store = store_with(&["a", "b", "c"]);
        store.toggle_complete(2).unwrap();
        let p = store.progress();
        assert!((p - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_delete_shifts_later_tasks_down() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        store.toggle_complete(2).unwrap();

        let removed = store.delete_task(1).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(store.len(), 3);
        assert_eq!(texts(&store), ["a", "c", "d"]);
        assert!(store.task(1).unwrap().is_complete);
    }

    #[test]
    fn test_edit_cycle() {
        let mut store = store_with(&["old text"]);
        store.begin_edit(0).unwrap();
        assert!(store.task(0).unwrap().is_editing);

        store.update_edit_text(0, "new").unwrap();
        store.update_edit_text(0, "new text").unwrap();
        assert_eq!(store.task(0).unwrap().text, "new text");
        assert!(store.task(0).unwrap().is_editing);

        store.commit_edit(0, "new text").unwrap();
        let task = store.task(0).unwrap();
        assert_eq!(task.text, "new text");
        assert!(!task.is_editing);
    }

    #[test]
    fn test_edit_may_leave_text_empty() {
        let mut store = store_with(&["something"]);
        store.begin_edit(0).unwrap();
        store.commit_edit(0, "").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.task(0).unwrap().text, "");
    }

    #[test]
    fn test_update_edit_text_ignores_edit_state() {
        let mut store = store_with(&["a"]);
        store.update_edit_text(0, "b").unwrap();
        assert_eq!(store.task(0).unwrap().text, "b");
        assert!(!store.task(0).unwrap().is_editing);
    }

    #[test]
    fn test_several_tasks_can_be_editing() {
        let mut store = store_with(&["a", "b", "c"]);
        store.begin_edit(0).unwrap();
        store.begin_edit(2).unwrap();
        let editing: Vec<bool> = store.tasks().iter().map(|t| t.is_editing).collect();
        assert_eq!(editing, [true, false, true]);
    }

    #[test]
    fn test_toggle_complete_keeps_edit_state() {
        let mut store = store_with(&["a"]);
        store.begin_edit(0).unwrap();
        store.toggle_complete(0).unwrap();
        let task = store.task(0).unwrap();
        assert!(task.is_complete);
        assert!(task.is_editing);
    }

    #[test]
    fn test_category_never_changes() {
        let mut store = store_with(&["a"]);
        store.begin_edit(0).unwrap();
        store.commit_edit(0, "b").unwrap();
        store.toggle_complete(0).unwrap();
        assert_eq!(store.task(0).unwrap().category, "General");
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        let mut store = TaskListStore::new();
        store.toggle_theme();
        assert!(!store.dark_mode());
        store.toggle_theme();
        assert!(store.dark_mode());
    }

    #[test]
    fn test_theme_is_independent_of_tasks() {
        let mut store = store_with(&["a"]);
        store.toggle_theme();
        assert_eq!(texts(&store), ["a"]);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut store = store_with(&["a", "b"]);
        let before = store.tasks().to_vec();
        let expected = StoreError::IndexOutOfRange { index: 2, len: 2 };

        assert_eq!(store.toggle_complete(2), Err(expected.clone()));
        assert_eq!(store.begin_edit(2), Err(expected.clone()));
        assert_eq!(store.update_edit_text(2, "x"), Err(expected.clone()));
        assert_eq!(store.commit_edit(2, "x"), Err(expected.clone()));
        assert_eq!(store.delete_task(2), Err(expected));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_out_of_range_on_empty_list() {
        let mut store = TaskListStore::new();
        assert_eq!(
            store.delete_task(0),
            Err(StoreError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_error_message() {
        let err = StoreError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "task index 5 is out of range (list has 3 task(s))"
        );
    }
}
