//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align_right: bool,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table whose column widths grow to fit the rows added later.
    pub fn with_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.as_ref().to_string(),
                width: h.as_ref().width(),
                align_right: false,
            })
            .collect();
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn align_right(mut self, col: usize) -> Self {
        if let Some(c) = self.columns.get_mut(col) {
            c.align_right = true;
        }
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(row.iter()) {
            col.width = col.width.max(cell.width());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        self.push_line(&mut out, &header);

        // Rows
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            self.push_line(&mut out, &cells);
        }

        out
    }

    fn push_line(&self, out: &mut String, cells: &[&str]) {
        let mut line = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            let pad = " ".repeat(col.width.saturating_sub(cell.width()));
            if col.align_right {
                line.push_str(&pad);
                line.push_str(cell);
            } else {
                line.push_str(cell);
                line.push_str(&pad);
            }
            line.push_str("  ");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}
