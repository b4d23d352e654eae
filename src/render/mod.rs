// Rendering - pure functions from navigator state to ratatui widgets
//
// Nothing in this module mutates state. Each navigator gets a draw function
// over (frame, &state); shared chrome (title bar, help bar, pane scaffolding)
// lives here so both navigators stay visually uniform.

mod browser;
mod editor;

pub use browser::draw_browser;
pub use editor::draw_editor;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Rows taken by the title bar (bordered).
const TITLE_ROWS: u16 = 3;

/// Rows taken by the help bar (bordered).
const HELP_ROWS: u16 = 3;

/// Split the frame into title / content / help rows.
fn shell_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_ROWS),
            Constraint::Min(3),
            Constraint::Length(HELP_ROWS),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Render the title bar: the caller-supplied prompt plus a context string
/// (current path or grid position).
fn render_title(f: &mut Frame, area: Rect, prompt: &str, context: &str, theme: &Theme) {
    let text = if context.is_empty() {
        format!(" {prompt}")
    } else {
        format!(" {prompt} · {context}")
    };
    let title = Paragraph::new(text)
        .style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.title)),
        );
    f.render_widget(title, area);
}

/// Render the help bar describing the currently bound keys.
fn render_help(f: &mut Frame, area: Rect, items: &[String], theme: &Theme) {
    let text = format!(" {}", items.join("  │  "));
    let help = Paragraph::new(text)
        .style(Style::default().fg(theme.help))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    f.render_widget(help, area);
}

/// Bordered pane scaffold; the border color marks the active pane.
fn pane_block(title: String, active: bool, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.pane_border(active))
}

/// Pad a pane's lines with blanks so pane heights stay uniform even when the
/// content is shorter than the viewport.
fn pad_to_viewport(lines: &mut Vec<Line<'_>>, viewport_rows: usize) {
    while lines.len() < viewport_rows {
        lines.push(Line::from(""));
    }
}
