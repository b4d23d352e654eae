// Editor frame: Time | Value column panes over paired rows

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::{pad_to_viewport, pane_block, render_help, render_title, shell_layout};
use crate::editor::GridEditor;
use crate::entry::Entry;
use crate::grid::Column;
use crate::input::Mode;
use crate::util::fit_width;

pub fn draw_editor(f: &mut Frame, state: &GridEditor) {
    let (title_area, content_area, help_area) = shell_layout(f.area());

    let context = format!("{} rows", state.grid.len());
    render_title(f, title_area, &state.prompt, &context, &state.theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content_area);

    let entries = state.grid.entries();
    draw_column_pane(f, columns[0], state, &entries, Column::Time);
    draw_column_pane(f, columns[1], state, &entries, Column::Value);

    render_help(f, help_area, &help_items(state), &state.theme);
}

fn draw_column_pane(
    f: &mut Frame,
    area: Rect,
    state: &GridEditor,
    entries: &[Entry],
    col: Column,
) {
    let active = state.active_col == col;
    let label = match col {
        Column::Time => &state.config.time_label,
        Column::Value => &state.config.data_label,
    };
    let block = pane_block(format!(" {label} "), active, &state.theme);
    let inner = block.inner(area);
    let viewport = state.budget.min(inner.height as usize);
    let width = inner.width as usize;

    let mut lines: Vec<Line> = Vec::with_capacity(viewport);
    for (i, entry) in entries
        .iter()
        .enumerate()
        .skip(state.row_offset)
        .take(viewport)
    {
        let Entry::Cell {
            time_text,
            value_text,
            time_valid,
            value_valid,
        } = entry
        else {
            continue;
        };
        let (text, valid) = match col {
            Column::Time => (time_text, *time_valid),
            Column::Value => (value_text, *value_valid),
        };

        let is_edit_cell =
            state.mode == Mode::Editing && active && i == state.selected_row;
        let (shown, mut style) = if is_edit_cell {
            // The edit buffer replaces the committed value, with a cursor mark
            (
                format!("{}▏", state.edit_buffer),
                ratatui::style::Style::default().fg(state.theme.edit_cursor),
            )
        } else {
            (text.clone(), state.theme.cell_style(text, valid))
        };

        if active && i == state.selected_row {
            style = style.patch(state.theme.selection_style());
        }
        lines.push(Line::styled(
            fit_width(&format!(" {shown}"), width),
            style,
        ));
    }
    pad_to_viewport(&mut lines, viewport);

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn help_items(state: &GridEditor) -> Vec<String> {
    let t = &state.translator;
    match state.mode {
        Mode::Navigating => vec![
            t.tr("help.move"),
            t.tr("help.columns"),
            t.tr("help.edit"),
            t.tr("help.save"),
            t.tr("help.cancel"),
        ],
        Mode::Editing => vec![
            t.tr("help.type"),
            t.tr("help.commit"),
            t.tr("help.discard"),
        ],
    }
}
