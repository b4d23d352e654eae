// Browser frame: Parent | Current | Preview miller columns

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::{pad_to_viewport, pane_block, render_help, render_title, shell_layout};
use crate::browser::FileBrowser;
use crate::entry::Entry;
use crate::preview::Preview;
use crate::util::{fit_width, format_size};

pub fn draw_browser(f: &mut Frame, state: &FileBrowser) {
    let (title_area, content_area, help_area) = shell_layout(f.area());

    render_title(
        f,
        title_area,
        &state.prompt,
        &state.cwd.display().to_string(),
        &state.theme,
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(40),
            Constraint::Percentage(40),
        ])
        .split(content_area);

    draw_listing_pane(
        f,
        columns[0],
        state,
        &state.parent_entries,
        state.parent_selected,
        state.parent_offset,
        parent_title(state),
        false,
    );
    draw_listing_pane(
        f,
        columns[1],
        state,
        &state.entries,
        Some(state.selected),
        state.current_offset,
        current_title(state),
        true,
    );
    draw_preview_pane(f, columns[2], state);

    render_help(f, help_area, &help_items(state), &state.theme);
}

fn parent_title(state: &FileBrowser) -> String {
    state
        .cwd
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| format!(" {} ", n.to_string_lossy()))
        .unwrap_or_else(|| " / ".to_string())
}

fn current_title(state: &FileBrowser) -> String {
    state
        .cwd
        .file_name()
        .map(|n| format!(" {} ", n.to_string_lossy()))
        .unwrap_or_else(|| " / ".to_string())
}

#[allow(clippy::too_many_arguments)]
fn draw_listing_pane(
    f: &mut Frame,
    area: Rect,
    state: &FileBrowser,
    entries: &[Entry],
    selected: Option<usize>,
    offset: usize,
    title: String,
    active: bool,
) {
    let block = pane_block(title, active, &state.theme);
    let inner = block.inner(area);
    let viewport = state.budget.min(inner.height as usize);
    let width = inner.width as usize;

    let mut lines: Vec<Line> = Vec::with_capacity(viewport);
    for (i, entry) in entries.iter().enumerate().skip(offset).take(viewport) {
        let Entry::Fs {
            kind, is_hidden, ..
        } = entry
        else {
            continue;
        };
        let label = fit_width(&entry.fs_label(state.config.show_file_size), width);
        let mut style = state.theme.fs_style(*kind, *is_hidden);
        // The parent pane also highlights its row (marking where we came
        // from) without owning the focus
        if selected == Some(i) {
            style = style.patch(state.theme.selection_style());
        }
        lines.push(Line::styled(label, style));
    }
    pad_to_viewport(&mut lines, viewport);

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_preview_pane(f: &mut Frame, area: Rect, state: &FileBrowser) {
    let title = format!(" {} ", state.translator.tr("pane.preview"));
    let block = pane_block(title, false, &state.theme);
    let inner = block.inner(area);
    let viewport = state.budget.min(inner.height as usize);
    let width = inner.width as usize;
    let offset = state.preview_scroll.offset();

    let mut lines: Vec<Line> = Vec::with_capacity(viewport);
    match &state.preview {
        Preview::Empty => {}
        Preview::Listing(entries) => {
            for entry in entries.iter().skip(offset).take(viewport) {
                let Entry::Fs {
                    kind, is_hidden, ..
                } = entry
                else {
                    continue;
                };
                lines.push(Line::styled(
                    fit_width(&entry.fs_label(state.config.show_file_size), width),
                    state.theme.fs_style(*kind, *is_hidden),
                ));
            }
        }
        Preview::Text(text) => {
            for line in text.iter().skip(offset).take(viewport) {
                lines.push(Line::from(fit_width(line, width)));
            }
        }
        Preview::Metadata {
            name,
            size_bytes,
            kind,
        } => {
            lines.push(Line::from(fit_width(&format!("name: {name}"), width)));
            lines.push(Line::from(format!("size: {}", format_size(*size_bytes))));
            lines.push(Line::from(format!("type: {}", kind.type_name())));
        }
    }
    pad_to_viewport(&mut lines, viewport);

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn help_items(state: &FileBrowser) -> Vec<String> {
    let t = &state.translator;
    vec![
        t.tr("help.move"),
        t.tr("help.ascend"),
        t.tr("help.descend"),
        if state.directories_only {
            t.tr("help.select_dir")
        } else {
            t.tr("help.select")
        },
        t.tr("help.preview_scroll"),
        t.tr("help.cancel"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavigatorConfig;
    use crate::translate::Translator;
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut lines = Vec::new();
        for y in 0..buf.area.height {
            let mut line = String::new();
            for x in 0..buf.area.width {
                line.push_str(buf[(x, y)].symbol());
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    #[test]
    fn browser_frame_shows_prompt_entries_and_help() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "hi").unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();

        let mut state = FileBrowser::new(
            "Pick a file",
            false,
            dir.path(),
            NavigatorConfig::default(),
            Translator::default(),
        );
        state.set_budget(10);

        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_browser(f, &state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Pick a file"));
        assert!(text.contains("docs"));
        assert!(text.contains("readme.md"));
        assert!(text.contains("Preview"));
        assert!(text.contains("Esc cancel"));
    }

    #[test]
    fn metadata_preview_renders_its_block() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blob.bin"), [0u8, 1, 2]).unwrap();

        let mut state = FileBrowser::new(
            "Pick",
            false,
            dir.path(),
            NavigatorConfig::default(),
            Translator::default(),
        );
        state.set_budget(10);
        // Select the binary file (".." is index 0)
        state.apply(crate::input::Command::MoveDown);

        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_browser(f, &state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("name: blob.bin"));
        assert!(text.contains("type: file"));
    }
}
