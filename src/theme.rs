// Theme support for the navigator panes
//
// Provides color palettes selectable via config. "auto" uses the terminal's
// ANSI palette, named themes use true color (RGB).

use ratatui::style::{Color, Modifier, Style};

use crate::entry::FsKind;

/// Color palette for the navigator UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Entry colors
    pub directory: Color,
    pub archive: Color,
    pub file: Color,
    pub hidden: Color,
    pub parent_marker: Color,
    pub cell_valid: Color,
    pub cell_invalid: Color,

    // UI element colors
    pub title: Color,
    pub border: Color,
    pub border_active: Color,
    pub highlight_bg: Color,
    pub help: Color,
    pub edit_cursor: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            directory: Color::Cyan,
            archive: Color::Magenta,
            file: Color::White,
            hidden: Color::DarkGray,
            parent_marker: Color::Yellow,
            cell_valid: Color::Green,
            cell_invalid: Color::Red,
            title: Color::Cyan,
            border: Color::White,
            border_active: Color::Cyan,
            highlight_bg: Color::DarkGray,
            help: Color::Gray,
            edit_cursor: Color::Yellow,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            directory: Color::Rgb(0x8b, 0xe9, 0xfd), // cyan
            archive: Color::Rgb(0xbd, 0x93, 0xf9),   // purple
            file: Color::Rgb(0xf8, 0xf8, 0xf2),      // foreground
            hidden: Color::Rgb(0x62, 0x72, 0xa4),    // comment
            parent_marker: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            cell_valid: Color::Rgb(0x50, 0xfa, 0x7b), // green
            cell_invalid: Color::Rgb(0xff, 0x55, 0x55), // red
            title: Color::Rgb(0x8b, 0xe9, 0xfd),     // cyan
            border: Color::Rgb(0x62, 0x72, 0xa4),    // comment
            border_active: Color::Rgb(0x8b, 0xe9, 0xfd), // cyan
            highlight_bg: Color::Rgb(0x44, 0x47, 0x5a), // current line
            help: Color::Rgb(0x62, 0x72, 0xa4),      // comment
            edit_cursor: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            directory: Color::Rgb(0x83, 0xa5, 0x98), // aqua
            archive: Color::Rgb(0xd3, 0x86, 0x9b),   // purple
            file: Color::Rgb(0xeb, 0xdb, 0xb2),      // foreground
            hidden: Color::Rgb(0x92, 0x83, 0x74),    // gray
            parent_marker: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
            cell_valid: Color::Rgb(0xb8, 0xbb, 0x26), // green
            cell_invalid: Color::Rgb(0xfb, 0x49, 0x34), // red
            title: Color::Rgb(0x83, 0xa5, 0x98),     // aqua
            border: Color::Rgb(0x92, 0x83, 0x74),    // gray
            border_active: Color::Rgb(0x83, 0xa5, 0x98), // aqua
            highlight_bg: Color::Rgb(0x3c, 0x38, 0x36), // bg1
            help: Color::Rgb(0x92, 0x83, 0x74),      // gray
            edit_cursor: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
        }
    }

    /// Foreground style for a filesystem entry.
    pub fn fs_style(&self, kind: FsKind, is_hidden: bool) -> Style {
        if is_hidden {
            return Style::default().fg(self.hidden);
        }
        let color = match kind {
            FsKind::ParentMarker => self.parent_marker,
            FsKind::Directory => self.directory,
            FsKind::Archive => self.archive,
            FsKind::File => self.file,
        };
        Style::default().fg(color)
    }

    /// Foreground style for an editor cell by validity. Blank cells render
    /// as plain text; only non-empty invalid text is flagged.
    pub fn cell_style(&self, text: &str, valid: bool) -> Style {
        if text.trim().is_empty() {
            Style::default().fg(self.file)
        } else if valid {
            Style::default().fg(self.cell_valid)
        } else {
            Style::default().fg(self.cell_invalid)
        }
    }

    /// Style layered onto the selected row of the active pane.
    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border color for a pane based on whether it holds the focus.
    pub fn pane_border(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.border_active)
        } else {
            Style::default().fg(self.border)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_falls_back_to_auto() {
        assert_eq!(Theme::by_name("no-such-theme").name, "auto");
        assert_eq!(Theme::by_name("DRACULA").name, "dracula");
    }

    #[test]
    fn blank_cells_are_not_flagged_invalid() {
        let theme = Theme::auto();
        assert_eq!(theme.cell_style("", false).fg, Some(theme.file));
        assert_eq!(theme.cell_style("abc", false).fg, Some(theme.cell_invalid));
        assert_eq!(theme.cell_style("3.5", true).fg, Some(theme.cell_valid));
    }
}
