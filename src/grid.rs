// Cell grid - the editor's content provider
//
// Two parallel columns of text cells derived from numeric arrays. The grid
// always holds at least MIN_ROWS rows and grows lazily when the selection
// advances past the end. Validity is re-derived on every commit, never
// stored stale.

use crate::entry::Entry;

/// The grid never shrinks below this many rows.
pub const MIN_ROWS: usize = 10;

/// Which column a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Time,
    Value,
}

impl Column {
    pub fn other(self) -> Self {
        match self {
            Column::Time => Column::Value,
            Column::Value => Column::Time,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Cell {
    text: String,
    valid: bool,
}

impl Cell {
    fn from_number(n: f64) -> Self {
        let mut cell = Cell::default();
        cell.set(format_number(n));
        cell
    }

    fn set(&mut self, text: String) {
        self.valid = is_valid_number(&text);
        self.text = text;
    }
}

#[derive(Debug, Clone, Default)]
struct Row {
    time: Cell,
    value: Cell,
}

/// The editable grid behind the Time/Value panes.
#[derive(Debug, Clone)]
pub struct CellGrid {
    rows: Vec<Row>,
}

impl CellGrid {
    /// Build a grid from two numeric series. The shorter series is padded
    /// with blank cells, then the grid is padded to at least MIN_ROWS.
    pub fn from_series(times: &[f64], values: &[f64]) -> Self {
        let len = times.len().max(values.len()).max(MIN_ROWS);
        let rows = (0..len)
            .map(|i| Row {
                time: times.get(i).copied().map(Cell::from_number).unwrap_or_default(),
                value: values
                    .get(i)
                    .copied()
                    .map(Cell::from_number)
                    .unwrap_or_default(),
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append blank rows until `row` is a valid index.
    pub fn ensure_row(&mut self, row: usize) {
        while self.rows.len() <= row {
            self.rows.push(Row::default());
        }
    }

    /// Current text of a cell. Out-of-bounds reads return the empty string
    /// (the row simply hasn't been grown yet).
    pub fn cell_text(&self, row: usize, col: Column) -> &str {
        self.rows
            .get(row)
            .map(|r| match col {
                Column::Time => r.time.text.as_str(),
                Column::Value => r.value.text.as_str(),
            })
            .unwrap_or("")
    }

    pub fn cell_valid(&self, row: usize, col: Column) -> bool {
        self.rows
            .get(row)
            .map(|r| match col {
                Column::Time => r.time.valid,
                Column::Value => r.value.valid,
            })
            .unwrap_or(false)
    }

    /// Write `text` into a cell, growing the grid if needed, and re-derive
    /// the cell's validity.
    pub fn commit(&mut self, row: usize, col: Column, text: String) {
        self.ensure_row(row);
        let target = match col {
            Column::Time => &mut self.rows[row].time,
            Column::Value => &mut self.rows[row].value,
        };
        target.set(text);
    }

    /// Rows as pane entries, for rendering.
    pub fn entries(&self) -> Vec<Entry> {
        self.rows
            .iter()
            .map(|r| Entry::Cell {
                time_text: r.time.text.clone(),
                value_text: r.value.text.clone(),
                time_valid: r.time.valid,
                value_valid: r.value.valid,
            })
            .collect()
    }

    /// Materialize the result arrays. Rows where either cell fails
    /// validation are dropped; the two arrays stay pairwise aligned.
    pub fn validate_and_convert(&self) -> (Vec<f64>, Vec<f64>) {
        let mut times = Vec::new();
        let mut values = Vec::new();
        for row in &self.rows {
            if !(row.time.valid && row.value.valid) {
                continue;
            }
            // Validity guarantees these parse
            let (Ok(t), Ok(v)) = (
                row.time.text.trim().parse::<f64>(),
                row.value.text.trim().parse::<f64>(),
            ) else {
                continue;
            };
            times.push(t);
            values.push(v);
        }
        (times, values)
    }
}

fn is_valid_number(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// Render a number the way a user would type it: integers without a
/// fractional part, everything else in the shortest round-trip form.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
