//! Rendering of the statistics sections.

use crate::config::TotalTimeMode;
use crate::core::calculator::duration::DurationStats;
use crate::core::calculator::stations::StationStats;
use crate::core::calculator::time::TimeStats;
use crate::core::calculator::users::UserStats;
use crate::models::trip::{Trip, TripTable};
use crate::utils::date::{month_name, weekday_name};
use crate::utils::formatting::{format_number, separator};
use crate::utils::secs2readable;
use crate::utils::table::Table;
use std::io::{self, Write};
use std::time::Duration;

pub const NO_DATA: &str = "No data available for the selected filters.";

pub fn section_start<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{title}...\n")
}

pub fn section_end<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "\nThis took {:.6} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", separator())
}

pub fn print_time_stats<W: Write>(out: &mut W, stats: &TimeStats) -> io::Result<()> {
    let Some(month) = stats.month else {
        return writeln!(out, "{NO_DATA}");
    };
    writeln!(out, "The most common month is: {}", month_name(month))?;

    if let Some(day) = stats.weekday {
        writeln!(out, "\nThe most common day is: {}", weekday_name(day))?;
    }
    if let Some(hour) = stats.hour {
        writeln!(out, "\nThe most common start hour is: {hour}")?;
    }
    Ok(())
}

pub fn print_station_stats<W: Write>(out: &mut W, stats: &StationStats) -> io::Result<()> {
    let (Some(start), Some(end), Some(trip)) = (&stats.start, &stats.end, &stats.trip) else {
        return writeln!(out, "{NO_DATA}");
    };

    writeln!(
        out,
        "The most commonly used start station is: {} ({} trips)",
        start.station, start.count
    )?;
    writeln!(
        out,
        "\nThe most commonly used end station is: {} ({} trips)",
        end.station, end.count
    )?;
    writeln!(
        out,
        "\nThe most frequent combination of start station and end station trip is:\n"
    )?;

    let mut table = Table::with_headers(&["Start Station", "End Station", "Times"]).align_right(2);
    table.add_row(vec![
        trip.start.clone(),
        trip.end.clone(),
        trip.count.to_string(),
    ]);
    write!(out, "{}", table.render())
}

pub fn print_duration_stats<W: Write>(
    out: &mut W,
    stats: &DurationStats,
    mode: TotalTimeMode,
) -> io::Result<()> {
    let (Some(longest), Some(mean)) = (stats.longest, stats.mean) else {
        return writeln!(out, "{NO_DATA}");
    };

    let total = match mode {
        TotalTimeMode::Max => longest,
        TotalTimeMode::Sum => stats.sum,
    };
    writeln!(
        out,
        "The total travel time is: {} seconds ({})",
        format_number(total),
        secs2readable(total)
    )?;
    writeln!(
        out,
        "\nThe mean travel time is: {} seconds ({})",
        format_number(mean),
        secs2readable(mean)
    )
}

pub fn print_user_stats<W: Write>(out: &mut W, stats: &UserStats) -> io::Result<()> {
    writeln!(out, "List with counts of user types:\n")?;
    if stats.user_types.is_empty() {
        writeln!(out, "{NO_DATA}")?;
    } else {
        write!(out, "{}", counts_table("User Type", &stats.user_types).render())?;
    }

    match &stats.gender {
        Some(g) if g.is_empty() => {
            writeln!(out, "\nList with counts of gender:\n")?;
            writeln!(out, "{NO_DATA}")?;
        }
        Some(g) => {
            writeln!(out, "\nList with counts of gender:\n")?;
            write!(out, "{}", counts_table("Gender", g).render())?;
        }
        None => writeln!(out, "\nNo data about gender in data set found.")?,
    }

    match &stats.birth_year {
        Some(by) => {
            writeln!(
                out,
                "\nList of information about earliest, most recent and most common year of birth:\n"
            )?;
            let (Some(earliest), Some(recent), Some(common)) =
                (by.earliest, by.most_recent, by.most_common)
            else {
                return writeln!(out, "{NO_DATA}");
            };
            writeln!(out, "Earliest year of birth: {earliest}")?;
            writeln!(out, "Most recent year of birth: {recent}")?;
            writeln!(out, "Most common year of birth: {common}")?;
        }
        None => writeln!(out, "\nNo data about birth year in data set found.")?,
    }

    Ok(())
}

fn counts_table(label: &str, counts: &[(String, usize)]) -> Table {
    let mut table = Table::with_headers(&[label, "Count"]).align_right(1);
    for (value, n) in counts {
        table.add_row(vec![value.clone(), n.to_string()]);
    }
    table
}

/// Print a window of trips: source index, original columns, derived columns.
pub fn print_rows<W: Write>(out: &mut W, table: &TripTable, rows: &[Trip]) -> io::Result<()> {
    let mut headers = vec![String::new()];
    headers.extend(table.column_names());

    let mut t = Table::with_headers(headers.as_slice()).align_right(0);
    for trip in rows {
        let mut row = vec![trip.index.to_string()];
        row.extend(trip.record.iter().map(str::to_string));
        // keep short records aligned with the header row
        row.resize(table.headers.len() + 1, String::new());
        row.extend(trip.derived_values());
        t.add_row(row);
    }
    write!(out, "{}", t.render())
}
