//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which wraps a `TaskListStore`,
//! translates key presses into store calls, and renders the store's state
//! (header with theme toggle, draft input, progress bar, task list, status bar).

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::{debug, info};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};

use crate::fields::ThemeChoice;
use crate::store::TaskListStore;
use crate::task::Task;
use crate::tui::{
    colors::{palette, Palette},
    enums::{AppState, Control},
    input::InputField,
    utils::centered_rect,
};

const EMPTY_MESSAGE: &str = "No todos available. Add a todo to get started!";
const PLACEHOLDER: &str = "Enter a task...";
const HIGHLIGHT_SYMBOL: &str = ">> ";
const NUMBER_WIDTH: u16 = 4;
const CATEGORY_WIDTH: u16 = 8;
const CONTROLS_WIDTH: u16 = 36;

/// Application state for the task list UI.
pub struct App {
    state: AppState,
    store: TaskListStore,
    list_state: TableState,
    draft: InputField,
    edit_field: InputField,
    status_message: String,
}

impl App {
    pub fn new(store: TaskListStore) -> Self {
        let mut list_state = TableState::default();
        if !store.is_empty() {
            list_state.select(Some(0));
        }
        let draft = InputField::with_value(store.draft_input());
        App {
            state: AppState::TaskList,
            store,
            list_state,
            draft,
            edit_field: InputField::new(),
            status_message: String::new(),
        }
    }

    pub fn store(&self) -> &TaskListStore {
        &self.store
    }

    /// Hand the store back once the UI is done with it.
    pub fn into_store(self) -> TaskListStore {
        self.store
    }

    fn selected(&self) -> Option<usize> {
        self.list_state.selected().filter(|&i| i < self.store.len())
    }

    fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    fn palette(&self) -> Palette {
        palette(self.store.dark_mode())
    }

    /// Keep the selection on a valid row after the list changed length.
    fn clamp_selection(&mut self) {
        let len = self.store.len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    /// Check a per-task control against the task's flags, reporting why it is
    /// unavailable. Returns the selected index when the control may be used.
    fn control_target(&mut self, control: Control) -> Option<usize> {
        let Some(index) = self.selected() else {
            self.set_status_message("No task selected");
            return None;
        };
        let task = self.store.task(index)?;
        if control.enabled(task.is_complete, task.is_editing) {
            Some(index)
        } else {
            let reason = if task.is_editing { "being edited" } else { "complete" };
            self.set_status_message(format!(
                "{} is unavailable: task {} is {}",
                control.label(),
                index + 1,
                reason
            ));
            None
        }
    }

    fn add_task(&mut self) {
        if self.store.add_task() {
            self.draft.clear();
            self.list_state.select(Some(self.store.len() - 1));
            self.set_status_message("Task added");
        }
    }

    fn complete_selected(&mut self) {
        if let Some(index) = self.control_target(Control::Complete) {
            match self.store.toggle_complete(index) {
                Ok(()) => self.set_status_message(format!("Task {} complete", index + 1)),
                Err(e) => self.set_status_message(format!("Error: {e}")),
            }
        }
    }

    fn edit_selected(&mut self) {
        let Some(index) = self.control_target(Control::Edit) else {
            return;
        };
        let Some(task) = self.store.task(index) else {
            return;
        };
        let (already_editing, text) = (task.is_editing, task.text.clone());
        if !already_editing {
            if let Err(e) = self.store.begin_edit(index) {
                self.set_status_message(format!("Error: {e}"));
                return;
            }
        }
        self.edit_field = InputField::with_value(&text);
        self.state = AppState::EditTask(index);
    }

    fn remove_selected(&mut self) {
        if let Some(index) = self.control_target(Control::Remove) {
            match self.store.delete_task(index) {
                Ok(task) => {
                    self.clamp_selection();
                    self.set_status_message(format!("Removed \"{}\"", task.text));
                }
                Err(e) => self.set_status_message(format!("Error: {e}")),
            }
        }
    }

    fn toggle_theme(&mut self) {
        self.store.toggle_theme();
        let theme = if self.store.dark_mode() { "Dark" } else { "Light" };
        self.set_status_message(format!("{theme} mode"));
    }

    /// Handle a key press while the task list has focus.
    ///
    /// Returns true if the application should quit.
    fn handle_task_list_input(&mut self, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Char('q') => {
                if self.store.is_empty() {
                    return Ok(true);
                }
                self.state = AppState::ConfirmQuit;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(selected) = self.list_state.selected() {
                    self.list_state.select(Some(selected.saturating_sub(1)));
                } else if !self.store.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(selected) = self.list_state.selected() {
                    if selected + 1 < self.store.len() {
                        self.list_state.select(Some(selected + 1));
                    }
                } else if !self.store.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => {
                self.state = AppState::Draft;
            }
            KeyCode::Char('c') => self.complete_selected(),
            KeyCode::Char('e') | KeyCode::Enter => self.edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('h') | KeyCode::Char('?') => self.state = AppState::Help,
            _ => {}
        }
        Ok(false)
    }

    /// Handle a key press while typing a new task.
    fn handle_draft_input(&mut self, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Esc | KeyCode::Tab => {
                self.state = AppState::TaskList;
                return Ok(false);
            }
            KeyCode::Enter => {
                self.add_task();
                return Ok(false);
            }
            KeyCode::Left => self.draft.move_cursor_left(),
            KeyCode::Right => self.draft.move_cursor_right(),
            KeyCode::Home => self.draft.move_home(),
            KeyCode::End => self.draft.move_end(),
            KeyCode::Backspace => self.draft.handle_backspace(),
            KeyCode::Delete => self.draft.handle_delete(),
            KeyCode::Char(c) => self.draft.handle_char(c),
            _ => return Ok(false),
        }
        self.store.set_draft_input(self.draft.value.clone());
        Ok(false)
    }

    /// Handle a key press in the edit field of the task at `index`.
    ///
    /// Text changes reach the store on every keystroke; Enter saves.
    fn handle_edit_input(&mut self, index: usize, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Esc => {
                // The task stays in edit mode and can be resumed later.
                self.state = AppState::TaskList;
                return Ok(false);
            }
            KeyCode::Enter => {
                match self.store.commit_edit(index, self.edit_field.value.clone()) {
                    Ok(()) => self.set_status_message(format!("Task {} saved", index + 1)),
                    Err(e) => self.set_status_message(format!("Error: {e}")),
                }
                self.state = AppState::TaskList;
                return Ok(false);
            }
            KeyCode::Left => self.edit_field.move_cursor_left(),
            KeyCode::Right => self.edit_field.move_cursor_right(),
            KeyCode::Home => self.edit_field.move_home(),
            KeyCode::End => self.edit_field.move_end(),
            KeyCode::Backspace => self.edit_field.handle_backspace(),
            KeyCode::Delete => self.edit_field.handle_delete(),
            KeyCode::Char(c) => self.edit_field.handle_char(c),
            _ => return Ok(false),
        }
        if let Err(e) = self.store.update_edit_text(index, self.edit_field.value.clone()) {
            self.set_status_message(format!("Error: {e}"));
            self.state = AppState::TaskList;
        }
        Ok(false)
    }

    /// Handle the quit confirmation. Returns true if the user confirmed.
    fn handle_confirm_quit_input(&mut self, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return Ok(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.state = AppState::TaskList;
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_help_input(&mut self, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') | KeyCode::Char('?') => {
                self.state = AppState::TaskList;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Dispatch one key press based on the current state.
    ///
    /// Returns true if the application should quit.
    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> io::Result<bool> {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(matches!(key, KeyCode::Char('c') | KeyCode::Char('q')));
        }
        self.clear_status_message();
        debug!("key {:?} in {:?}", key, self.state);

        match self.state {
            AppState::TaskList => self.handle_task_list_input(key),
            AppState::Draft => self.handle_draft_input(key),
            AppState::EditTask(index) => self.handle_edit_input(index, key),
            AppState::Help => self.handle_help_input(key),
            AppState::ConfirmQuit => self.handle_confirm_quit_input(key),
        }
    }

    /// Poll for and handle keyboard events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return self.handle_key(key.code, key.modifiers);
                }
            }
        }
        Ok(false)
    }

    /// Render the title line with today's date and the theme toggle.
    fn render_header(&self, f: &mut Frame, area: Rect) {
        let p = self.palette();
        let theme = ThemeChoice::from_dark_mode(self.store.dark_mode());
        let today = Local::now().format("%a %d %b %Y").to_string();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(28)])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("To-Do List", Style::default().fg(p.accent).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(today, Style::default().fg(p.muted).add_modifier(Modifier::ITALIC)),
        ]));
        f.render_widget(title, chunks[0]);

        let toggle = Paragraph::new(Line::from(vec![
            Span::styled("[t] ", Style::default().fg(p.muted)),
            Span::raw(theme.toggle_label()),
        ]))
        .alignment(Alignment::Right);
        f.render_widget(toggle, chunks[1]);
    }

    /// Render the new-task input and its Add hint.
    fn render_draft(&self, f: &mut Frame, area: Rect) {
        let p = self.palette();
        let focused = self.state == AppState::Draft;
        let border = if focused { p.accent } else { p.border };

        let block = Block::default()
            .borders(Borders::ALL)
            .title("New task - [Enter] Add")
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        let (visible, cursor_col) = self.draft.visible_window(inner.width as usize);

        let text = if self.draft.value.is_empty() && !focused {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(p.muted)))
        } else {
            Line::from(visible)
        };
        f.render_widget(Paragraph::new(text).block(block), area);

        if focused && inner.width > 0 && inner.height > 0 {
            // cursor_col < inner.width, so this stays inside the box
            f.set_cursor_position((inner.x + cursor_col as u16, inner.y));
        }
    }

    fn render_progress(&self, f: &mut Frame, area: Rect) {
        let p = self.palette();
        let progress = self.store.progress();
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Progress")
                    .border_style(Style::default().fg(p.border)),
            )
            .gauge_style(Style::default().fg(p.progress).bg(p.bg))
            .ratio((progress / 100.0).clamp(0.0, 1.0))
            .label(format!(
                "{:.0}% ({}/{})",
                progress,
                self.store.completed_count(),
                self.store.len()
            ));
        f.render_widget(gauge, area);
    }

    /// Control hints for one row; disabled controls are dimmed.
    fn control_spans(task: &Task, p: Palette) -> Line<'static> {
        if task.is_editing {
            return Line::from(Span::styled("[Enter] Save", Style::default().fg(p.editing)));
        }
        let mut spans = Vec::new();
        for (key, control) in [("c", Control::Complete), ("e", Control::Edit), ("d", Control::Remove)] {
            let style = if control.enabled(task.is_complete, task.is_editing) {
                Style::default().fg(p.fg)
            } else {
                Style::default().fg(p.muted).add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(format!("[{}] {} ", key, control.label()), style));
        }
        Line::from(spans)
    }

    /// Render the numbered task list, or the empty-state message.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let p = self.palette();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Tasks ({}) - Press 'h' for help", self.store.len()))
            .border_style(Style::default().fg(p.border));

        if self.store.is_empty() {
            let message = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(p.muted))
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(message, area);
            return;
        }

        let editing_index = match self.state {
            AppState::EditTask(i) => Some(i),
            _ => None,
        };
        let inner = block.inner(area);
        let text_width = inner.width.saturating_sub(
            HIGHLIGHT_SYMBOL.len() as u16 + NUMBER_WIDTH + CATEGORY_WIDTH + CONTROLS_WIDTH + 3,
        );
        let (edit_visible, edit_col) = self.edit_field.visible_window(text_width as usize);

        let rows: Vec<Row> = self
            .store
            .tasks()
            .iter()
            .enumerate()
            .map(|(i, task)| {
                let text = if editing_index == Some(i) {
                    edit_visible.clone()
                } else {
                    task.text.clone()
                };
                let style = if task.is_editing {
                    Style::default().fg(p.editing)
                } else if task.is_complete {
                    Style::default().fg(p.muted).add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(p.fg)
                };
                Row::new(vec![
                    Cell::from(format!("{}.", i + 1)),
                    Cell::from(Span::styled(text, style)),
                    Cell::from(Span::styled(task.category.clone(), Style::default().fg(p.muted))),
                    Cell::from(Self::control_spans(task, p)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(NUMBER_WIDTH),
            Constraint::Min(20),
            Constraint::Length(CATEGORY_WIDTH),
            Constraint::Length(CONTROLS_WIDTH),
        ];

        let table = Table::new(rows, widths)
            .block(block)
            .row_highlight_style(Style::default().bg(p.highlight_bg).fg(p.highlight_fg))
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        f.render_stateful_widget(table, area, &mut self.list_state);

        if let Some(index) = editing_index {
            let offset = self.list_state.offset();
            let row = index.saturating_sub(offset);
            if index >= offset && row < inner.height as usize {
                let x = inner
                    .x
                    .saturating_add(HIGHLIGHT_SYMBOL.len() as u16 + NUMBER_WIDTH + 1)
                    .saturating_add(edit_col as u16);
                let y = inner.y + row as u16;
                if x < inner.right() {
                    f.set_cursor_position((x, y));
                }
            }
        }
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let p = self.palette();
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let help_text = vec![
            Line::from(Span::styled("Task List:", bold)),
            Line::from("  ↑/k, ↓/j     Select task"),
            Line::from("  a/i/Tab      Type a new task"),
            Line::from("  c            Complete selected task"),
            Line::from("  e/Enter      Edit selected task (resumes an open edit)"),
            Line::from("  d/Delete     Remove selected task"),
            Line::from("  t            Toggle dark/light mode"),
            Line::from("  h/?          Show this help"),
            Line::from("  q            Quit (asks first if tasks exist)"),
            Line::from("  Ctrl+C       Quit immediately"),
            Line::from(""),
            Line::from(Span::styled("New Task / Edit:", bold)),
            Line::from("  Enter        Add / Save"),
            Line::from("  Esc          Back to list (edits stay open)"),
            Line::from("  ←/→ Home/End Move cursor"),
            Line::from(""),
            Line::from("A task being edited cannot be completed or removed;"),
            Line::from("a completed task cannot be completed again or edited."),
        ];

        let area = centered_rect(70, 70, area);
        f.render_widget(Clear, area);
        let paragraph = Paragraph::new(help_text)
            .style(Style::default().bg(p.bg).fg(p.fg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Esc to return")
                    .border_style(Style::default().fg(p.accent)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    /// Render the quit confirmation over the task list.
    fn render_confirm_quit(&self, f: &mut Frame, area: Rect) {
        let p = self.palette();
        let area = centered_rect(60, 60, area);
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(Span::styled(
                "Quit the to-do list?",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{} task(s) will be lost.", self.store.len())),
            Line::from("Press 'y' to quit, 'n' to cancel"),
        ];
        let paragraph = Paragraph::new(text)
            .style(Style::default().bg(p.bg).fg(p.fg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Confirm Quit")
                    .border_style(Style::default().fg(p.accent)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let p = self.palette();
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::TaskList => format!(
                    "Tasks: {} | Complete: {} | Press 'h' for help",
                    self.store.len(),
                    self.store.completed_count()
                ),
                AppState::Draft => "New task (Enter to add, Esc to go back)".to_string(),
                AppState::EditTask(i) => format!("Editing task {} (Enter to save, Esc to leave open)", i + 1),
                AppState::Help => "Help".to_string(),
                AppState::ConfirmQuit => "Quit? Tasks are not saved (y/n)".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(p.accent).fg(p.highlight_fg))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Draw the whole screen.
    fn render(&mut self, f: &mut Frame) {
        let p = self.palette();
        f.render_widget(
            Block::default().style(Style::default().bg(p.bg).fg(p.fg)),
            f.area(),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Draft input
                Constraint::Length(3), // Progress
                Constraint::Min(3),    // Tasks
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_draft(f, chunks[1]);
        self.render_progress(f, chunks[2]);
        self.render_task_list(f, chunks[3]);
        self.render_status_bar(f, chunks[4]);

        match self.state {
            AppState::Help => self.render_help(f, chunks[3]),
            AppState::ConfirmQuit => self.render_confirm_quit(f, chunks[3]),
            _ => {}
        }
    }

    /// Main event loop.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("task list started (dark_mode={})", self.store.dark_mode());
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        info!("task list closed");
        Ok(())
    }
}
