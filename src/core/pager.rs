//! Row pager: shows the table in fixed-size windows on request.

use crate::errors::AppResult;
use crate::models::trip::{Trip, TripTable};
use crate::ui::messages::info;
use crate::ui::prompt::Console;
use crate::ui::report::print_rows;
use std::io::{BufRead, Write};

/// Position-based window over a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    offset: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Return the next window and advance the offset. Past the end of the
    /// table the window is empty.
    pub fn next_window<'a>(&mut self, table: &'a TripTable) -> &'a [Trip] {
        let rows = table.window(self.offset, self.page_size);
        self.offset += self.page_size;
        rows
    }

    pub fn is_exhausted(&self, table: &TripTable) -> bool {
        self.offset >= table.len()
    }
}

/// Offer the raw rows and page through them until the user answers `no`,
/// the input ends, or the table runs out.
pub fn page_rows<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
    page_size: usize,
) -> AppResult<()> {
    let prompt = format!(
        "\nWould you like to view {page_size} rows of individual trip data? Enter yes for displaying data.\n"
    );
    if console.answer_is(&prompt, "yes")? != Some(true) {
        return Ok(());
    }

    let mut pager = Pager::new(page_size);
    loop {
        let rows = pager.next_window(table);
        if rows.is_empty() {
            info(console.out(), "No rows to display.")?;
        } else {
            print_rows(console.out(), table, rows)?;
        }

        if pager.is_exhausted(table) {
            info(console.out(), "End of trip data reached.")?;
            break;
        }

        match console.ask("Do you wish to continue? For exiting enter no: ")? {
            None => break,
            Some(a) if a.eq_ignore_ascii_case("no") => break,
            Some(_) => {}
        }
    }

    Ok(())
}
