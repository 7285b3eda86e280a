//! Enumerations for TUI state management.

/// Which part of the screen currently receives key presses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppState {
    TaskList,
    /// Typing into the new-task input.
    Draft,
    /// Typing into the edit input of the task at this index.
    EditTask(usize),
    Help,
    /// Asking before quitting throws the list away.
    ConfirmQuit,
}

/// Per-task controls that can be disabled depending on the task's flags.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Control {
    Complete,
    Edit,
    Remove,
}

impl Control {
    /// Whether this control may be used on a task with the given flags.
    pub fn enabled(self, is_complete: bool, is_editing: bool) -> bool {
        match self {
            Control::Complete => !is_editing && !is_complete,
            Control::Edit => !is_complete,
            Control::Remove => !is_editing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::Complete => "Complete",
            Control::Edit => "Edit",
            Control::Remove => "Remove",
        }
    }
}
