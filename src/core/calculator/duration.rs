use crate::models::trip::TripTable;

/// Trip duration aggregates, in seconds. Missing durations are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DurationStats {
    /// Number of trips with a duration value
    pub count: usize,
    pub longest: Option<f64>,
    pub sum: f64,
    pub mean: Option<f64>,
}

pub fn duration_stats(table: &TripTable) -> DurationStats {
    let mut stats = DurationStats::default();

    for d in table.trips.iter().filter_map(|t| t.duration) {
        stats.count += 1;
        stats.sum += d;
        stats.longest = Some(stats.longest.map_or(d, |m| m.max(d)));
    }

    if stats.count > 0 {
        stats.mean = Some(stats.sum / stats.count as f64);
    }

    stats
}
