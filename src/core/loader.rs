//! Table loader: reads a city's CSV, derives month/weekday/hour columns and
//! applies the month/day filters of a selection.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::filters::Selection;
use crate::models::trip::{Trip, TripTable};
use crate::utils::date::parse_timestamp;
use chrono::{Datelike, Timelike};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{self, Read};
use tracing::{debug, warn};

pub const COL_START_TIME: &str = "Start Time";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_TRIP_DURATION: &str = "Trip Duration";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

/// Positions of the columns we read, resolved from the header row.
struct ColumnIndex {
    start_time: usize,
    start_station: usize,
    end_station: usize,
    duration: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, source: &str) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| AppError::MissingColumn {
                column: name.to_string(),
                path: source.to_string(),
            })
        };

        Ok(Self {
            start_time: require(COL_START_TIME)?,
            start_station: require(COL_START_STATION)?,
            end_station: require(COL_END_STATION)?,
            duration: require(COL_TRIP_DURATION)?,
            user_type: require(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }
}

/// Load the table for `selection.city` and apply its month/day filters.
pub fn load_table(cfg: &Config, selection: &Selection) -> AppResult<TripTable> {
    let path = cfg.source_for(selection.city)?;
    let file = File::open(&path)
        .map_err(|e| AppError::Io(io::Error::new(e.kind(), format!("{}: {e}", path.display()))))?;

    let source = path.display().to_string();
    let table = read_trips(file, &source)?;
    debug!(source = %source, rows = table.len(), "table loaded");

    let filtered = table.filter(selection.month, selection.day);
    debug!(
        month = %selection.month,
        day = %selection.day,
        rows = filtered.len(),
        "filters applied"
    );

    Ok(filtered)
}

/// Parse a trip CSV from any reader. `source` is only used in error messages.
pub fn read_trips<R: Read>(reader: R, source: &str) -> AppResult<TripTable> {
    // short rows are allowed; their trailing cells read as empty
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let idx = ColumnIndex::resolve(&headers, source)?;

    let mut trips = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = i + 1;

        let raw_start = field(&record, idx.start_time);
        if raw_start.is_empty() {
            warn!(source, row, "skipping row without start time");
            continue;
        }
        let start_time = parse_timestamp(raw_start).ok_or_else(|| AppError::InvalidTimestamp {
            row,
            value: raw_start.to_string(),
        })?;

        let trip = Trip {
            index: i,
            start_time,
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_station: optional_text(&record, Some(idx.start_station)),
            end_station: optional_text(&record, Some(idx.end_station)),
            duration: parse_number(&record, idx.duration, COL_TRIP_DURATION, row)?,
            user_type: optional_text(&record, Some(idx.user_type)),
            gender: optional_text(&record, idx.gender),
            birth_year: match idx.birth_year {
                Some(col) => parse_number(&record, col, COL_BIRTH_YEAR, row)?,
                None => None,
            },
            record,
        };
        trips.push(trip);
    }

    Ok(TripTable {
        headers: headers.iter().map(str::to_string).collect(),
        has_gender: idx.gender.is_some(),
        has_birth_year: idx.birth_year.is_some(),
        trips,
    })
}

fn field(record: &StringRecord, col: usize) -> &str {
    record.get(col).map(str::trim).unwrap_or("")
}

fn optional_text(record: &StringRecord, col: Option<usize>) -> Option<String> {
    col.map(|c| field(record, c))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Empty cells are missing values, anything else must parse as a float.
/// Non-finite values (`NaN`, `inf`) count as missing too.
fn parse_number(
    record: &StringRecord,
    col: usize,
    name: &str,
    row: usize,
) -> AppResult<Option<f64>> {
    let raw = field(record, col);
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(|v| v.is_finite().then_some(v))
        .map_err(|_| AppError::InvalidNumber {
            row,
            column: name.to_string(),
            value: raw.to_string(),
        })
}
