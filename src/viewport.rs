// Viewport sizing - how many content rows each pane may display
//
// The budget is a display cap, not an exact fit: panes render inside bordered
// blocks and ratatui clips overflow, so a generous tier on a tall terminal
// simply means "show up to this many rows".

/// Rows of fixed UI chrome around the browser's panes: title bar (3, with
/// borders), help bar (3) and the pane block's own top/bottom borders (2).
pub const BROWSER_CHROME_ROWS: u16 = 8;

/// The editor adds a column-header row inside each pane.
pub const EDITOR_CHROME_ROWS: u16 = 9;

/// Budget used when the terminal size cannot be queried at all
/// (headless or non-tty environment).
const FALLBACK_BUDGET: usize = 20;

/// Smallest tier, also used when the chrome alone does not fit.
const MIN_TIER: usize = 15;

/// Compute the per-pane row budget for a terminal of `terminal_height` rows.
///
/// Tiers are keyed on the raw terminal height: under 20 rows → 15 items,
/// under 40 → 25, anything taller → 40. A `configured_max` greater than zero
/// can only shrink the tiered value, never grow it.
///
/// Pure function of its three inputs.
pub fn compute_budget(terminal_height: u16, chrome_rows: u16, configured_max: usize) -> usize {
    let tiered = if terminal_height <= chrome_rows {
        // Degenerate terminal: the chrome alone doesn't fit
        MIN_TIER
    } else if terminal_height < 20 {
        MIN_TIER
    } else if terminal_height < 40 {
        25
    } else {
        40
    };

    clamp_configured(tiered, configured_max)
}

/// Query the terminal and compute the budget, falling back to a fixed
/// default when the size is unavailable. Never blocks or panics.
pub fn current_budget(chrome_rows: u16, configured_max: usize) -> usize {
    match crossterm::terminal::size() {
        Ok((_cols, rows)) => compute_budget(rows, chrome_rows, configured_max),
        Err(err) => {
            tracing::debug!("terminal size query failed, using fallback budget: {err}");
            clamp_configured(FALLBACK_BUDGET, configured_max)
        }
    }
}

fn clamp_configured(budget: usize, configured_max: usize) -> usize {
    if configured_max > 0 && configured_max < budget {
        configured_max
    } else {
        budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_tiers() {
        assert_eq!(compute_budget(50, 13, 0), 40);
        assert_eq!(compute_budget(25, 13, 0), 25);
        assert_eq!(compute_budget(19, 3, 0), 15);
        assert_eq!(compute_budget(39, 13, 0), 25);
        assert_eq!(compute_budget(40, 13, 0), 40);
    }

    #[test]
    fn configured_max_only_shrinks() {
        assert_eq!(compute_budget(50, 13, 10), 10);
        // A configured value above the tier never grows the budget
        assert_eq!(compute_budget(25, 13, 99), 25);
        // Zero means no clamp
        assert_eq!(compute_budget(50, 13, 0), 40);
    }

    #[test]
    fn degenerate_terminal_gets_minimum_tier() {
        assert_eq!(compute_budget(5, 8, 0), MIN_TIER);
        assert_eq!(compute_budget(8, 8, 0), MIN_TIER);
    }

    #[test]
    fn fallback_respects_configured_clamp() {
        assert_eq!(clamp_configured(FALLBACK_BUDGET, 7), 7);
        assert_eq!(clamp_configured(FALLBACK_BUDGET, 0), FALLBACK_BUDGET);
    }
}
