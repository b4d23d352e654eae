// Input dispatch - raw terminal events to navigator commands
//
// The dispatcher is a pure classification layer: it maps one crossterm event
// to at most one Command, given the current mode and the configured binding
// scheme. Mode is checked before the scheme - edit-mode character capture
// takes priority over every navigation binding, so 'j' is text while editing
// even with vim keys on.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

/// Top-level mode of a navigator's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Navigating,
    Editing,
}

/// Preview-pane scroll requests, independent of the row selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewScroll {
    /// One screen-third (PageUp/PageDown)
    PageUp,
    PageDown,
    /// One line (Ctrl+U/Ctrl+D, vim scheme)
    LineUp,
    LineDown,
    /// Three lines (Shift+J/K, mouse wheel)
    StepUp,
    StepDown,
    Top,
    Bottom,
}

/// One state-machine transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    /// Browser: ascend. Editor: focus the left column.
    Left,
    /// Browser: descend. Editor: focus the right column.
    Right,
    /// Enter while navigating
    Activate,
    /// Escape or 'q' while navigating
    Cancel,
    /// Ctrl+S (editor)
    Save,
    Preview(PreviewScroll),
    // Edit-mode commands
    CommitEdit,
    AbortEdit,
    Insert(char),
    DeleteBack,
}

/// Result of applying a command to a navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<R> {
    /// The event mutated state (or was deliberately absorbed)
    Handled,
    /// Not ours - the host loop may apply its default behavior
    Unhandled,
    /// Terminal transition: the loop ends and returns this result
    Exit(R),
}

/// Key-binding scheme: arrows only, or arrows plus vim-style keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bindings {
    pub vim_keys: bool,
}

impl Bindings {
    pub fn new(vim_keys: bool) -> Self {
        Self { vim_keys }
    }

    /// Classify a raw event. `None` means the event maps to no command;
    /// what that means (absorbed vs unhandled) is the state machine's call.
    pub fn classify(&self, event: &Event, mode: Mode) -> Option<Command> {
        match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return None;
                }
                match mode {
                    Mode::Editing => self.classify_editing(key.code, key.modifiers),
                    Mode::Navigating => self.classify_navigating(key.code, key.modifiers),
                }
            }
            // Mouse support is wheel scroll only; everything else is not ours
            Event::Mouse(mouse) => match (mode, mouse.kind) {
                (Mode::Navigating, MouseEventKind::ScrollUp) => {
                    Some(Command::Preview(PreviewScroll::StepUp))
                }
                (Mode::Navigating, MouseEventKind::ScrollDown) => {
                    Some(Command::Preview(PreviewScroll::StepDown))
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn classify_editing(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
        match code {
            KeyCode::Enter => Some(Command::CommitEdit),
            KeyCode::Esc => Some(Command::AbortEdit),
            KeyCode::Backspace => Some(Command::DeleteBack),
            // Printable ASCII only; control chords, arrows and everything
            // else never reach the edit buffer
            KeyCode::Char(c)
                if (' '..='~').contains(&c) && !modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(Command::Insert(c))
            }
            _ => None,
        }
    }

    fn classify_navigating(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
        // Control chords first: Ctrl+S saves, Ctrl+U/D scroll the preview
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('s') => Some(Command::Save),
                KeyCode::Char('u') if self.vim_keys => {
                    Some(Command::Preview(PreviewScroll::LineUp))
                }
                KeyCode::Char('d') if self.vim_keys => {
                    Some(Command::Preview(PreviewScroll::LineDown))
                }
                _ => None,
            };
        }

        match code {
            KeyCode::Up => Some(Command::MoveUp),
            KeyCode::Down => Some(Command::MoveDown),
            KeyCode::Left => Some(Command::Left),
            KeyCode::Right => Some(Command::Right),
            KeyCode::Enter => Some(Command::Activate),
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::Cancel),
            KeyCode::PageUp => Some(Command::Preview(PreviewScroll::PageUp)),
            KeyCode::PageDown => Some(Command::Preview(PreviewScroll::PageDown)),
            KeyCode::Home => Some(Command::Preview(PreviewScroll::Top)),
            KeyCode::End => Some(Command::Preview(PreviewScroll::Bottom)),
            KeyCode::Char('k') if self.vim_keys => Some(Command::MoveUp),
            KeyCode::Char('j') if self.vim_keys => Some(Command::MoveDown),
            KeyCode::Char('h') if self.vim_keys => Some(Command::Left),
            KeyCode::Char('l') if self.vim_keys => Some(Command::Right),
            KeyCode::Char('K') if self.vim_keys => Some(Command::Preview(PreviewScroll::StepUp)),
            KeyCode::Char('J') if self.vim_keys => Some(Command::Preview(PreviewScroll::StepDown)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseButton, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn wheel(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn arrows_always_bound_while_navigating() {
        let b = Bindings::new(false);
        assert_eq!(
            b.classify(&key(KeyCode::Up), Mode::Navigating),
            Some(Command::MoveUp)
        );
        assert_eq!(
            b.classify(&key(KeyCode::Right), Mode::Navigating),
            Some(Command::Right)
        );
    }

    #[test]
    fn vim_keys_require_the_scheme() {
        let plain = Bindings::new(false);
        let vim = Bindings::new(true);
        assert_eq!(plain.classify(&key(KeyCode::Char('j')), Mode::Navigating), None);
        assert_eq!(
            vim.classify(&key(KeyCode::Char('j')), Mode::Navigating),
            Some(Command::MoveDown)
        );
        assert_eq!(
            vim.classify(&ctrl('d'), Mode::Navigating),
            Some(Command::Preview(PreviewScroll::LineDown))
        );
        assert_eq!(plain.classify(&ctrl('d'), Mode::Navigating), None);
        assert_eq!(
            vim.classify(&key(KeyCode::Char('J')), Mode::Navigating),
            Some(Command::Preview(PreviewScroll::StepDown))
        );
    }

    #[test]
    fn edit_mode_captures_before_any_binding() {
        // 'j' is text while editing, even with vim keys enabled
        let vim = Bindings::new(true);
        assert_eq!(
            vim.classify(&key(KeyCode::Char('j')), Mode::Editing),
            Some(Command::Insert('j'))
        );
        // 'q' is text too, not cancel
        assert_eq!(
            vim.classify(&key(KeyCode::Char('q')), Mode::Editing),
            Some(Command::Insert('q'))
        );
        // Arrows never reach the edit buffer
        assert_eq!(vim.classify(&key(KeyCode::Up), Mode::Editing), None);
    }

    #[test]
    fn edit_mode_commit_and_abort() {
        let b = Bindings::new(false);
        assert_eq!(
            b.classify(&key(KeyCode::Enter), Mode::Editing),
            Some(Command::CommitEdit)
        );
        assert_eq!(
            b.classify(&key(KeyCode::Esc), Mode::Editing),
            Some(Command::AbortEdit)
        );
        assert_eq!(
            b.classify(&key(KeyCode::Backspace), Mode::Editing),
            Some(Command::DeleteBack)
        );
    }

    #[test]
    fn ctrl_s_saves_only_while_navigating() {
        let b = Bindings::new(false);
        assert_eq!(b.classify(&ctrl('s'), Mode::Navigating), Some(Command::Save));
        // While editing, a control chord is not printable input
        assert_eq!(b.classify(&ctrl('s'), Mode::Editing), None);
    }

    #[test]
    fn wheel_scrolls_preview_other_mouse_unbound() {
        let b = Bindings::new(false);
        assert_eq!(
            b.classify(&wheel(MouseEventKind::ScrollUp), Mode::Navigating),
            Some(Command::Preview(PreviewScroll::StepUp))
        );
        assert_eq!(
            b.classify(&wheel(MouseEventKind::Down(MouseButton::Left)), Mode::Navigating),
            None
        );
        assert_eq!(b.classify(&wheel(MouseEventKind::ScrollUp), Mode::Editing), None);
    }

    #[test]
    fn q_and_escape_cancel_while_navigating() {
        let b = Bindings::new(false);
        assert_eq!(
            b.classify(&key(KeyCode::Char('q')), Mode::Navigating),
            Some(Command::Cancel)
        );
        assert_eq!(
            b.classify(&key(KeyCode::Esc), Mode::Navigating),
            Some(Command::Cancel)
        );
    }
}
