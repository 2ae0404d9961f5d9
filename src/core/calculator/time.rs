use crate::core::calculator::counts::mode;
use crate::models::trip::TripTable;
use chrono::Weekday;

/// Most frequent times of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeStats {
    pub month: Option<u32>,
    pub weekday: Option<Weekday>,
    pub hour: Option<u32>,
}

pub fn time_stats(table: &TripTable) -> TimeStats {
    TimeStats {
        month: mode(table.trips.iter().map(|t| t.month)).map(|(m, _)| m),
        // keyed by Monday-first ordinal so ties resolve Monday..Sunday
        weekday: mode(table.trips.iter().map(|t| t.weekday.num_days_from_monday()))
            .map(|(d, _)| weekday_from_monday(d)),
        hour: mode(table.trips.iter().map(|t| t.hour)).map(|(h, _)| h),
    }
}

fn weekday_from_monday(n: u32) -> Weekday {
    match n {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}
