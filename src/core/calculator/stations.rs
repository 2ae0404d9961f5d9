use crate::core::calculator::counts::mode;
use crate::models::trip::TripTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCount {
    pub station: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripCount {
    pub start: String,
    pub end: String,
    pub count: usize,
}

/// Most popular stations and trip. Trips with a missing station are left
/// out of the counts that need it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StationStats {
    pub start: Option<StationCount>,
    pub end: Option<StationCount>,
    pub trip: Option<TripCount>,
}

pub fn station_stats(table: &TripTable) -> StationStats {
    let start = mode(table.trips.iter().filter_map(|t| t.start_station.as_deref())).map(
        |(s, count)| StationCount {
            station: s.to_string(),
            count,
        },
    );

    let end = mode(table.trips.iter().filter_map(|t| t.end_station.as_deref())).map(
        |(s, count)| StationCount {
            station: s.to_string(),
            count,
        },
    );

    let trip = mode(table.trips.iter().filter_map(|t| {
        Some((t.start_station.as_deref()?, t.end_station.as_deref()?))
    }))
    .map(|((s, e), count)| TripCount {
        start: s.to_string(),
        end: e.to_string(),
        count,
    });

    StationStats { start, end, trip }
}
