// File browser - three miller-column panes over the filesystem
//
// Parent | Current | Preview. The selection lives in the Current pane; the
// Parent pane mirrors where we came from, the Preview pane shows what the
// selection would reveal. Every transition recomputes pane contents from the
// current path instead of patching lists in place - stale-pane bugs cannot
// exist when there is nothing to go stale.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::NavigatorConfig;
use crate::entry::{Entry, FsKind};
use crate::input::{Bindings, Command, Mode, PreviewScroll, Transition};
use crate::listing::{is_fs_root, list_dir};
use crate::preview::{preview_for, Preview};
use crate::render;
use crate::scroll::{adjust, PreviewWindow};
use crate::term::TerminalSession;
use crate::theme::Theme;
use crate::translate::Translator;
use crate::viewport::{self, BROWSER_CHROME_ROWS};

/// Browser result: the chosen path, or `None` on cancellation.
pub type BrowseResult = Option<PathBuf>;

pub struct FileBrowser {
    pub(crate) prompt: String,
    pub(crate) directories_only: bool,
    pub(crate) config: NavigatorConfig,
    pub(crate) translator: Translator,
    pub(crate) theme: Theme,
    bindings: Bindings,

    // Navigator state, created fresh per invocation
    pub(crate) cwd: PathBuf,
    pub(crate) entries: Vec<Entry>,
    pub(crate) parent_entries: Vec<Entry>,
    pub(crate) parent_selected: Option<usize>,
    pub(crate) selected: usize,
    pub(crate) current_offset: usize,
    pub(crate) parent_offset: usize,
    pub(crate) preview: Preview,
    pub(crate) preview_scroll: PreviewWindow,
    pub(crate) cancelled: bool,

    /// Rows per pane for the current frame; refreshed before each dispatch
    pub(crate) budget: usize,
}

impl FileBrowser {
    pub fn new(
        prompt: impl Into<String>,
        directories_only: bool,
        start_path: impl Into<PathBuf>,
        config: NavigatorConfig,
        translator: Translator,
    ) -> Self {
        let start: PathBuf = start_path.into();
        // Canonicalize so ascend walks real components; a bad start path is
        // kept as-is and simply lists empty
        let cwd = start.canonicalize().unwrap_or(start);
        let theme = Theme::by_name(&config.theme);
        let bindings = Bindings::new(config.enable_vim_keys);

        let mut browser = Self {
            prompt: prompt.into(),
            directories_only,
            config,
            translator,
            theme,
            bindings,
            cwd,
            entries: Vec::new(),
            parent_entries: Vec::new(),
            parent_selected: None,
            selected: 0,
            current_offset: 0,
            parent_offset: 0,
            preview: Preview::Empty,
            preview_scroll: PreviewWindow::new(),
            cancelled: false,
            budget: viewport::current_budget(BROWSER_CHROME_ROWS, 0),
        };
        browser.refresh();
        browser.after_selection_change();
        browser
    }

    /// Run the blocking selection loop. Returns the chosen path, or `None`
    /// when the user cancelled.
    pub fn select(&mut self) -> Result<BrowseResult> {
        let mut session = TerminalSession::enter()?;
        let result = self.event_loop(&mut session);
        session.leave()?;
        result
    }

    fn event_loop(&mut self, session: &mut TerminalSession) -> Result<BrowseResult> {
        loop {
            self.budget =
                viewport::current_budget(BROWSER_CHROME_ROWS, self.config.max_display_items);
            let state: &FileBrowser = self;
            session.draw(|f| render::draw_browser(f, state))?;

            let event = session.next_event()?;
            match self.dispatch(&event) {
                Transition::Exit(result) => return Ok(result),
                Transition::Handled | Transition::Unhandled => {}
            }
        }
    }

    /// Map one raw event to exactly one transition.
    pub fn dispatch(&mut self, event: &crossterm::event::Event) -> Transition<BrowseResult> {
        // The browser has no edit mode; classification always sees Navigating
        match self.bindings.classify(event, Mode::Navigating) {
            Some(cmd) => self.apply(cmd),
            None => Transition::Unhandled,
        }
    }

    /// Apply one command to the state machine.
    pub fn apply(&mut self, cmd: Command) -> Transition<BrowseResult> {
        match cmd {
            Command::MoveUp => {
                if self.selected > 0 {
                    self.selected -= 1;
                    self.after_selection_change();
                }
                Transition::Handled
            }
            Command::MoveDown => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                    self.after_selection_change();
                }
                Transition::Handled
            }
            Command::Left => self.ascend(),
            Command::Right => match self.selected_entry().and_then(Entry::fs_kind) {
                Some(FsKind::Directory) => self.descend(),
                Some(FsKind::ParentMarker) => self.ascend(),
                _ => Transition::Handled,
            },
            Command::Activate => self.activate(),
            Command::Cancel => {
                tracing::debug!("browser cancelled at {}", self.cwd.display());
                self.cancelled = true;
                Transition::Exit(None)
            }
            // Ctrl+S is an editor binding; deliberate no-op here
            Command::Save => Transition::Handled,
            Command::Preview(scroll) => {
                self.scroll_preview(scroll);
                Transition::Handled
            }
            // Edit commands can never be classified while Navigating
            Command::CommitEdit
            | Command::AbortEdit
            | Command::Insert(_)
            | Command::DeleteBack => Transition::Unhandled,
        }
    }

    /// Enter selects a file (or a directory in directories-only mode) and
    /// descends otherwise.
    fn activate(&mut self) -> Transition<BrowseResult> {
        let Some(Entry::Fs { kind, path, .. }) = self.selected_entry() else {
            return Transition::Handled;
        };
        let (kind, path) = (*kind, path.clone());
        match kind {
            FsKind::ParentMarker => self.ascend(),
            FsKind::Directory => {
                if self.directories_only {
                    tracing::debug!("browser confirmed directory {}", path.display());
                    Transition::Exit(Some(path))
                } else {
                    self.descend()
                }
            }
            FsKind::Archive | FsKind::File => {
                if self.directories_only {
                    Transition::Handled
                } else {
                    tracing::debug!("browser confirmed file {}", path.display());
                    Transition::Exit(Some(path))
                }
            }
        }
    }

    /// Re-root at the parent directory, trying to re-select the directory we
    /// just left. Ascending from a filesystem root is a no-op - the root
    /// check comes before any parent listing attempt.
    fn ascend(&mut self) -> Transition<BrowseResult> {
        if is_fs_root(&self.cwd) {
            return Transition::Handled;
        }
        let exited = self
            .cwd
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        // parent() is Some here because cwd is not a root
        let parent = match self.cwd.parent() {
            Some(parent) => parent.to_path_buf(),
            None => return Transition::Handled,
        };

        self.cwd = parent;
        self.refresh();
        // Linear scan for the directory we came out of; "not found" leaves
        // the selection at index 0
        self.selected = exited
            .and_then(|name| self.position_of(&name))
            .unwrap_or(0);
        self.after_selection_change();
        Transition::Handled
    }

    fn descend(&mut self) -> Transition<BrowseResult> {
        let target = match self.selected_entry() {
            Some(Entry::Fs { path, .. }) => path.clone(),
            _ => return Transition::Handled,
        };
        self.cwd = target;
        self.refresh();
        self.selected = 0;
        self.after_selection_change();
        Transition::Handled
    }

    fn scroll_preview(&mut self, scroll: PreviewScroll) {
        let total = self.preview.len();
        let viewport = self.budget;
        let third = (viewport / 3).max(1);
        match scroll {
            PreviewScroll::PageUp => self.preview_scroll.scroll_up(third),
            PreviewScroll::PageDown => self.preview_scroll.scroll_down(third, total, viewport),
            PreviewScroll::LineUp => self.preview_scroll.scroll_up(1),
            PreviewScroll::LineDown => self.preview_scroll.scroll_down(1, total, viewport),
            PreviewScroll::StepUp => self.preview_scroll.scroll_up(3),
            PreviewScroll::StepDown => self.preview_scroll.scroll_down(3, total, viewport),
            PreviewScroll::Top => self.preview_scroll.to_top(),
            PreviewScroll::Bottom => self.preview_scroll.to_bottom(total, viewport),
        }
    }

    /// Recompute both listing panes from the current path. Called after
    /// every transition that changes `cwd`.
    fn refresh(&mut self) {
        let show_hidden = self.config.show_hidden_files;

        let mut entries = Vec::new();
        if !is_fs_root(&self.cwd) {
            if let Some(parent) = self.cwd.parent() {
                entries.push(Entry::parent_marker(parent.to_path_buf()));
            }
        }
        entries.extend(list_dir(&self.cwd, show_hidden));
        self.entries = entries;

        if is_fs_root(&self.cwd) {
            self.parent_entries = Vec::new();
            self.parent_selected = None;
        } else if let Some(parent) = self.cwd.parent() {
            self.parent_entries = list_dir(parent, show_hidden);
            let cwd_name = self
                .cwd
                .file_name()
                .map(|n| n.to_string_lossy().into_owned());
            self.parent_selected = cwd_name.and_then(|name| {
                self.parent_entries.iter().position(|e| match e {
                    Entry::Fs { name: n, .. } => *n == name,
                    _ => false,
                })
            });
        }

        self.parent_offset = adjust(
            self.parent_selected.unwrap_or(0),
            self.parent_offset,
            self.parent_entries.len(),
            self.budget,
        );
        self.current_offset = 0;
    }

    /// Keep the selection visible and rebuild the preview for it.
    fn after_selection_change(&mut self) {
        self.current_offset = adjust(
            self.selected,
            self.current_offset,
            self.entries.len(),
            self.budget,
        );
        self.preview = preview_for(self.selected_entry(), self.config.show_hidden_files);
        self.preview_scroll.reset();
    }

    pub(crate) fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected)
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| match e {
            Entry::Fs { name: n, .. } => n == name,
            _ => false,
        })
    }

    #[cfg(test)]
    pub(crate) fn set_budget(&mut self, budget: usize) {
        self.budget = budget;
    }
}
