use crate::models::filters::{DayFilter, MonthFilter};
use crate::utils::date::weekday_name;
use chrono::{NaiveDateTime, Weekday};
use csv::StringRecord;

/// Columns computed from `Start Time` when the table is loaded.
pub const DERIVED_COLUMNS: [&str; 3] = ["month", "day_of_week", "hour"];

/// One row of bikeshare usage data.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// 0-based position of the row in the source file
    pub index: usize,
    /// Original values, in source column order
    pub record: StringRecord,
    pub start_time: NaiveDateTime,
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub duration: Option<f64>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

impl Trip {
    /// Values of the derived columns, formatted for display.
    pub fn derived_values(&self) -> [String; 3] {
        [
            self.month.to_string(),
            weekday_name(self.weekday).to_string(),
            self.hour.to_string(),
        ]
    }
}

/// An in-memory trip table, either freshly loaded or a filtered view of one.
///
/// Gender and birth year are tracked per table: some sources simply do not
/// carry those columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripTable {
    pub headers: Vec<String>,
    pub has_gender: bool,
    pub has_birth_year: bool,
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Original columns plus the derived ones.
    pub fn column_count(&self) -> usize {
        self.headers.len() + DERIVED_COLUMNS.len()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.headers
            .iter()
            .cloned()
            .chain(DERIVED_COLUMNS.iter().map(|c| c.to_string()))
            .collect()
    }

    /// Return a new table holding only the trips matching both filters.
    /// The receiver is left untouched.
    pub fn filter(&self, month: MonthFilter, day: DayFilter) -> TripTable {
        TripTable {
            headers: self.headers.clone(),
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
            trips: self
                .trips
                .iter()
                .filter(|t| month.matches(t.month) && day.matches(t.weekday))
                .cloned()
                .collect(),
        }
    }

    /// Rows `[offset, offset + size)`, clamped to the table bounds.
    pub fn window(&self, offset: usize, size: usize) -> &[Trip] {
        let start = offset.min(self.trips.len());
        let end = offset.saturating_add(size).min(self.trips.len());
        &self.trips[start..end]
    }
}
