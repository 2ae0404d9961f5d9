use crate::models::city::City;
use crate::utils::date::{month_name, weekday_name};
use chrono::Weekday;
use std::fmt;

/// Months covered by the bikeshare data sets (January..June).
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Weekdays, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-based month number (1 = January .. 6 = June)
    Month(u32),
}

impl MonthFilter {
    /// Accepts "all" or a month name from January to June.
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Some(MonthFilter::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == s)
            .map(|idx| MonthFilter::Month(idx as u32 + 1))
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(m) => f.write_str(month_name(*m)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    /// Accepts "all" or a full English weekday name.
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Some(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).to_lowercase() == s)
            .map(DayFilter::Day)
    }

    pub fn matches(&self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == weekday,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Day(d) => f.write_str(weekday_name(*d)),
        }
    }
}

/// A validated city/month/day triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}
