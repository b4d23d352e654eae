// Grid editor - two paired columns of time/value cells
//
// Both panes share one row selection; Left/Right toggle which column is
// active. Enter drops into edit mode on the active cell; leaving edit mode
// either commits the buffer (revalidating the cell) or discards it - the
// cell is never left partially updated.

use anyhow::Result;

use crate::config::NavigatorConfig;
use crate::grid::{CellGrid, Column};
use crate::input::{Bindings, Command, Mode, Transition};
use crate::render;
use crate::scroll::adjust;
use crate::term::TerminalSession;
use crate::theme::Theme;
use crate::translate::Translator;
use crate::viewport::{self, EDITOR_CHROME_ROWS};

/// Editor result: pairwise-aligned `(times, values)`. Both empty on
/// cancellation.
pub type EditResult = (Vec<f64>, Vec<f64>);

pub struct GridEditor {
    pub(crate) prompt: String,
    pub(crate) config: NavigatorConfig,
    pub(crate) translator: Translator,
    pub(crate) theme: Theme,
    bindings: Bindings,

    pub(crate) grid: CellGrid,
    pub(crate) active_col: Column,
    pub(crate) selected_row: usize,
    pub(crate) row_offset: usize,
    pub(crate) mode: Mode,
    pub(crate) edit_buffer: String,
    pub(crate) cancelled: bool,

    /// Rows per pane for the current frame; refreshed before each dispatch
    pub(crate) budget: usize,
}

impl GridEditor {
    pub fn new(
        prompt: impl Into<String>,
        initial_times: &[f64],
        initial_values: &[f64],
        config: NavigatorConfig,
        translator: Translator,
    ) -> Self {
        let theme = Theme::by_name(&config.theme);
        let bindings = Bindings::new(config.enable_vim_keys);
        Self {
            prompt: prompt.into(),
            config,
            translator,
            theme,
            bindings,
            grid: CellGrid::from_series(initial_times, initial_values),
            active_col: Column::Time,
            selected_row: 0,
            row_offset: 0,
            mode: Mode::Navigating,
            edit_buffer: String::new(),
            cancelled: false,
            budget: viewport::current_budget(EDITOR_CHROME_ROWS, 0),
        }
    }

    /// Run the blocking edit loop. Returns the validated series; both
    /// vectors are empty when the user cancelled.
    pub fn edit(&mut self) -> Result<EditResult> {
        let mut session = TerminalSession::enter()?;
        let result = self.event_loop(&mut session);
        session.leave()?;
        result
    }

    fn event_loop(&mut self, session: &mut TerminalSession) -> Result<EditResult> {
        loop {
            self.budget =
                viewport::current_budget(EDITOR_CHROME_ROWS, self.config.max_display_items);
            let state: &GridEditor = self;
            session.draw(|f| render::draw_editor(f, state))?;

            let event = session.next_event()?;
            match self.dispatch(&event) {
                Transition::Exit(result) => return Ok(result),
                Transition::Handled | Transition::Unhandled => {}
            }
        }
    }

    /// Map one raw event to exactly one transition. While editing, key
    /// events that map to nothing are absorbed so no navigation binding can
    /// fire underneath the edit buffer.
    pub fn dispatch(&mut self, event: &crossterm::event::Event) -> Transition<EditResult> {
        match self.bindings.classify(event, self.mode) {
            Some(cmd) => self.apply(cmd),
            None => match (self.mode, event) {
                (Mode::Editing, crossterm::event::Event::Key(_)) => Transition::Handled,
                _ => Transition::Unhandled,
            },
        }
    }

    /// Apply one command to the state machine.
    pub fn apply(&mut self, cmd: Command) -> Transition<EditResult> {
        match cmd {
            Command::MoveUp => {
                if self.selected_row > 0 {
                    self.selected_row -= 1;
                    self.keep_selection_visible();
                }
                Transition::Handled
            }
            Command::MoveDown => {
                self.advance_row();
                Transition::Handled
            }
            Command::Left | Command::Right => {
                self.active_col = self.active_col.other();
                Transition::Handled
            }
            Command::Activate => {
                self.edit_buffer = self
                    .grid
                    .cell_text(self.selected_row, self.active_col)
                    .to_string();
                self.mode = Mode::Editing;
                Transition::Handled
            }
            Command::Cancel => {
                tracing::debug!("editor cancelled");
                self.cancelled = true;
                Transition::Exit((Vec::new(), Vec::new()))
            }
            Command::Save => {
                let (times, values) = self.grid.validate_and_convert();
                tracing::debug!("editor confirmed {} rows", times.len());
                Transition::Exit((times, values))
            }
            Command::CommitEdit => {
                let text = std::mem::take(&mut self.edit_buffer);
                self.grid.commit(self.selected_row, self.active_col, text);
                self.mode = Mode::Navigating;
                // Auto-advance to the next row, growing the grid if needed
                self.advance_row();
                Transition::Handled
            }
            Command::AbortEdit => {
                self.edit_buffer.clear();
                self.mode = Mode::Navigating;
                Transition::Handled
            }
            Command::Insert(c) => {
                self.edit_buffer.push(c);
                Transition::Handled
            }
            Command::DeleteBack => {
                self.edit_buffer.pop();
                Transition::Handled
            }
            // The editor has no preview pane
            Command::Preview(_) => Transition::Unhandled,
        }
    }

    /// Move the shared selection down one row, appending a blank row when it
    /// would otherwise run past the end.
    fn advance_row(&mut self) {
        let next = self.selected_row + 1;
        self.grid.ensure_row(next);
        self.selected_row = next;
        self.keep_selection_visible();
    }

    fn keep_selection_visible(&mut self) {
        self.row_offset = adjust(
            self.selected_row,
            self.row_offset,
            self.grid.len(),
            self.budget,
        );
    }

    #[cfg(test)]
    pub(crate) fn set_budget(&mut self, budget: usize) {
        self.budget = budget;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MIN_ROWS;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    fn editor(times: &[f64], values: &[f64]) -> GridEditor {
        let mut editor = GridEditor::new(
            "enter data",
            times,
            values,
            NavigatorConfig::default(),
            Translator::default(),
        );
        editor.set_budget(8);
        editor
    }

    fn type_text(editor: &mut GridEditor, text: &str) {
        for c in text.chars() {
            editor.apply(Command::Insert(c));
        }
    }

    #[test]
    fn cancel_exits_with_empty_pair() {
        let mut editor = editor(&[], &[]);
        assert_eq!(
            editor.apply(Command::Cancel),
            Transition::Exit((Vec::new(), Vec::new()))
        );
        assert!(editor.cancelled);
    }

    #[test]
    fn enter_seeds_buffer_from_active_cell() {
        let mut editor = editor(&[1.5], &[10.0]);
        editor.apply(Command::Activate);
        assert_eq!(editor.mode, Mode::Editing);
        assert_eq!(editor.edit_buffer, "1.5");
    }

    #[test]
    fn commit_writes_cell_and_advances() {
        let mut editor = editor(&[], &[]);
        editor.apply(Command::Activate);
        type_text(&mut editor, "3.5");
        editor.apply(Command::CommitEdit);

        assert_eq!(editor.mode, Mode::Navigating);
        assert_eq!(editor.grid.cell_text(0, Column::Time), "3.5");
        assert!(editor.grid.cell_valid(0, Column::Time));
        assert_eq!(editor.selected_row, 1);
        assert!(editor.edit_buffer.is_empty());
    }

    #[test]
    fn commit_of_empty_text_marks_cell_invalid() {
        let mut editor = editor(&[2.0], &[20.0]);
        editor.apply(Command::Activate);
        // Clear the seeded "2"
        editor.apply(Command::DeleteBack);
        editor.apply(Command::CommitEdit);

        assert_eq!(editor.grid.cell_text(0, Column::Time), "");
        assert!(!editor.grid.cell_valid(0, Column::Time));
    }

    #[test]
    fn abort_discards_buffer_without_touching_the_cell() {
        let mut editor = editor(&[7.0], &[70.0]);
        editor.apply(Command::Activate);
        type_text(&mut editor, "999");
        editor.apply(Command::AbortEdit);

        assert_eq!(editor.mode, Mode::Navigating);
        assert_eq!(editor.grid.cell_text(0, Column::Time), "7");
        assert_eq!(editor.selected_row, 0);
    }

    #[test]
    fn left_right_toggle_the_active_column() {
        let mut editor = editor(&[], &[]);
        assert_eq!(editor.active_col, Column::Time);
        editor.apply(Command::Right);
        assert_eq!(editor.active_col, Column::Value);
        editor.apply(Command::Left);
        assert_eq!(editor.active_col, Column::Time);
    }

    #[test]
    fn moving_past_the_last_row_grows_the_grid() {
        let mut editor = editor(&[], &[]);
        assert_eq!(editor.grid.len(), MIN_ROWS);
        for _ in 0..MIN_ROWS {
            editor.apply(Command::MoveDown);
        }
        assert_eq!(editor.selected_row, MIN_ROWS);
        assert_eq!(editor.grid.len(), MIN_ROWS + 1);
    }

    #[test]
    fn save_drops_invalid_rows_pairwise() {
        let mut editor = editor(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0]);
        // Blank out the middle row's value
        editor.apply(Command::MoveDown);
        editor.apply(Command::Right);
        editor.apply(Command::Activate);
        editor.apply(Command::DeleteBack);
        editor.apply(Command::DeleteBack);
        editor.apply(Command::CommitEdit);

        match editor.apply(Command::Save) {
            Transition::Exit((times, values)) => {
                assert_eq!(times, vec![1.0, 3.0]);
                assert_eq!(values, vec![10.0, 30.0]);
            }
            other => panic!("expected exit, got {other:?}"),
        }
    }

    #[test]
    fn arrows_are_absorbed_while_editing() {
        let mut editor = editor(&[], &[]);
        editor.apply(Command::Activate);
        let up = Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));

        assert_eq!(editor.dispatch(&up), Transition::Handled);
        assert_eq!(editor.selected_row, 0);
        assert_eq!(editor.mode, Mode::Editing);
    }

    #[test]
    fn escape_in_navigating_cancels_but_in_editing_discards() {
        let mut editor = editor(&[], &[]);
        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        editor.apply(Command::Activate);
        type_text(&mut editor, "42");
        assert_eq!(editor.dispatch(&esc), Transition::Handled);
        assert_eq!(editor.mode, Mode::Navigating);

        assert_eq!(
            editor.dispatch(&esc),
            Transition::Exit((Vec::new(), Vec::new()))
        );
    }

    #[test]
    fn scroll_follows_selection_past_the_viewport() {
        let mut editor = editor(&[], &[]);
        for _ in 0..9 {
            editor.apply(Command::MoveDown);
        }
        // budget 8: row 9 must be the bottom visible row
        assert_eq!(editor.selected_row, 9);
        assert_eq!(editor.row_offset, 2);
    }
}
