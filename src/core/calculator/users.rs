use crate::core::calculator::counts::{mode, value_counts};
use crate::models::trip::TripTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    pub most_common: Option<i32>,
}

/// User demographics. `gender` and `birth_year` are `None` when the source
/// table has no such column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub gender: Option<Vec<(String, usize)>>,
    pub birth_year: Option<BirthYearStats>,
}

pub fn user_stats(table: &TripTable) -> UserStats {
    let user_types: Vec<(String, usize)> =
        value_counts(table.trips.iter().filter_map(|t| t.user_type.as_deref()))
            .into_iter()
            .map(|(k, n)| (k.to_string(), n))
            .collect();

    let gender: Option<Vec<(String, usize)>> = table.has_gender.then(|| {
        value_counts(table.trips.iter().filter_map(|t| t.gender.as_deref()))
            .into_iter()
            .map(|(k, n)| (k.to_string(), n))
            .collect()
    });

    let birth_year = table.has_birth_year.then(|| {
        let years: Vec<i32> = table
            .trips
            .iter()
            .filter_map(|t| t.birth_year)
            .filter(|y| y.is_finite())
            .map(|y| y as i32)
            .collect();

        BirthYearStats {
            earliest: years.iter().min().copied(),
            most_recent: years.iter().max().copied(),
            most_common: mode(years.iter().copied()).map(|(y, _)| y),
        }
    });

    UserStats {
        user_types,
        gender,
        birth_year,
    }
}
