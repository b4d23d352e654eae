// Scroll control shared by every pane
//
// Two flavors of scrolling exist in the navigators:
// 1. Selection-driven: the offset chases the selected row so it stays visible.
//    This is the pure `adjust` function, identical for all list panes.
// 2. Free scrolling: the preview pane scrolls independently of any selection
//    (wheel, PageUp/Down, Home/End). That is `PreviewWindow`.

/// Keep the selected index visible inside the viewport.
///
/// Pure and idempotent: feeding the result back in returns it unchanged.
/// The returned offset always satisfies
/// `offset <= selected < offset + viewport_rows` (for in-bounds selections)
/// and `0 <= offset <= max(0, item_count - viewport_rows)`.
pub fn adjust(selected: usize, offset: usize, item_count: usize, viewport_rows: usize) -> usize {
    if viewport_rows == 0 {
        return 0;
    }
    // Everything fits: no scrolling needed
    if item_count <= viewport_rows {
        return 0;
    }

    let new_offset = if selected < offset {
        // Scrolled past the top: snap selection to the top row
        selected
    } else if selected >= offset + viewport_rows {
        // Selection fell below the bottom: snap to the bottom row
        selected - viewport_rows + 1
    } else {
        offset
    };

    new_offset.min(item_count - viewport_rows)
}

/// Free-scrolling window for the preview pane.
///
/// Owns only the offset; content length and viewport height are passed in on
/// each operation because the preview is recomputed from scratch after every
/// navigation step.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewWindow {
    offset: usize,
}

impl PreviewWindow {
    pub fn new() -> Self {
        Self { offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Reset to the top. Called whenever the previewed entry changes.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Scroll up by `lines`.
    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Scroll down by `lines`, clamped to the last page.
    pub fn scroll_down(&mut self, lines: usize, total: usize, viewport: usize) {
        self.offset = (self.offset + lines).min(Self::max_offset(total, viewport));
    }

    /// Jump to the top.
    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    /// Jump to the last page.
    pub fn to_bottom(&mut self, total: usize, viewport: usize) {
        self.offset = Self::max_offset(total, viewport);
    }

    /// Re-clamp after the content changed underneath us.
    pub fn clamp(&mut self, total: usize, viewport: usize) {
        self.offset = self.offset.min(Self::max_offset(total, viewport));
    }

    fn max_offset(total: usize, viewport: usize) -> usize {
        total.saturating_sub(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_scroll_when_content_fits() {
        assert_eq!(adjust(3, 7, 5, 10), 0);
        assert_eq!(adjust(0, 0, 0, 10), 0);
    }

    #[test]
    fn snaps_selection_to_top_row() {
        // selection above the window: offset follows it up
        assert_eq!(adjust(2, 5, 20, 5), 2);
    }

    #[test]
    fn snaps_selection_to_bottom_row() {
        // selection below the window: selection becomes the last visible row
        assert_eq!(adjust(9, 0, 20, 5), 5);
    }

    #[test]
    fn leaves_offset_alone_when_visible() {
        assert_eq!(adjust(6, 4, 20, 5), 4);
    }

    #[test]
    fn clamps_to_last_page() {
        assert_eq!(adjust(19, 40, 20, 5), 15);
    }

    #[test]
    fn selection_always_visible() {
        // Exhaustive sweep of small state spaces
        for count in 1..25usize {
            for viewport in 1..10usize {
                for selected in 0..count {
                    for offset in 0..30usize {
                        let out = adjust(selected, offset, count, viewport);
                        assert!(out <= selected, "selection above window");
                        assert!(selected < out + viewport, "selection below window");
                        assert!(out <= count.saturating_sub(viewport).max(0));
                    }
                }
            }
        }
    }

    #[test]
    fn adjust_is_idempotent() {
        for count in 1..25usize {
            for viewport in 1..10usize {
                for selected in 0..count {
                    for offset in 0..30usize {
                        let once = adjust(selected, offset, count, viewport);
                        let twice = adjust(selected, once, count, viewport);
                        assert_eq!(once, twice);
                    }
                }
            }
        }
    }

    #[test]
    fn preview_window_clamps_both_ends() {
        let mut win = PreviewWindow::new();
        win.scroll_up(10);
        assert_eq!(win.offset(), 0);

        win.scroll_down(1000, 50, 10);
        assert_eq!(win.offset(), 40);

        win.to_top();
        assert_eq!(win.offset(), 0);

        win.to_bottom(50, 10);
        assert_eq!(win.offset(), 40);

        // Content shrank underneath us
        win.clamp(15, 10);
        assert_eq!(win.offset(), 5);
    }

    #[test]
    fn preview_window_short_content_never_scrolls() {
        let mut win = PreviewWindow::new();
        win.scroll_down(3, 5, 10);
        assert_eq!(win.offset(), 0);
        win.to_bottom(5, 10);
        assert_eq!(win.offset(), 0);
    }
}
