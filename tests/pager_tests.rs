mod common;
use bikeshare::core::pager::{Pager, page_rows};
use bikeshare::models::city::City;
use bikeshare::models::filters::{DayFilter, MonthFilter};
use chrono::Weekday;
use common::{load_fixture, output_of, scripted};

#[test]
fn test_pager_windows_advance_by_page_size() {
    let table = load_fixture(City::Chicago);
    let mut pager = Pager::new(5);

    let idx = |rows: &[bikeshare::models::trip::Trip]| -> Vec<usize> {
        rows.iter().map(|t| t.index).collect()
    };

    assert_eq!(idx(pager.next_window(&table)), vec![0, 1, 2, 3, 4]);
    assert!(!pager.is_exhausted(&table));
    assert_eq!(idx(pager.next_window(&table)), vec![5, 6, 7, 8, 9]);
    assert_eq!(idx(pager.next_window(&table)), vec![10, 11]);
    assert!(pager.is_exhausted(&table));

    // past the end: empty, no panic
    assert!(pager.next_window(&table).is_empty());
    assert_eq!(pager.offset(), 20);
}

#[test]
fn test_yes_then_no_prints_first_window_only() {
    let table = load_fixture(City::Chicago);
    let mut console = scripted("yes\nno\n");

    page_rows(&mut console, &table, 5).expect("page");
    let out = output_of(console);

    assert!(out.contains("Start Time"));
    assert!(out.contains("day_of_week"));
    assert!(out.contains("2017-06-23 15:09:32"));
    assert!(out.contains("2017-01-17 14:53:07"));
    assert!(!out.contains("2017-06-26 09:01:20"));
    assert!(out.contains("Do you wish to continue?"));
}

#[test]
fn test_declining_shows_no_rows() {
    let table = load_fixture(City::Chicago);
    let mut console = scripted("No\n");

    page_rows(&mut console, &table, 5).expect("page");
    let out = output_of(console);

    assert!(!out.contains("2017-06-23 15:09:32"));
    assert!(!out.contains("Do you wish to continue?"));
}

#[test]
fn test_paging_past_the_end_stops_without_error() {
    let table = load_fixture(City::Chicago);
    let mut console = scripted("yes\nyes\nyes\nyes\nyes\n");

    page_rows(&mut console, &table, 5).expect("page");
    let out = output_of(console);

    // last partial window
    assert!(out.contains("2017-06-01 17:20:00"));
    assert!(out.contains("End of trip data reached."));
    assert_eq!(out.matches("Do you wish to continue?").count(), 2);
}

#[test]
fn test_paging_empty_table() {
    let table = load_fixture(City::Chicago).filter(MonthFilter::Month(1), DayFilter::Day(Weekday::Fri));
    let mut console = scripted("yes\n");

    page_rows(&mut console, &table, 5).expect("page");
    let out = output_of(console);

    assert!(out.contains("No rows to display."));
    assert!(out.contains("End of trip data reached."));
}

#[test]
fn test_paging_stops_when_input_ends() {
    let table = load_fixture(City::Chicago);
    let mut console = scripted("yes\n");

    page_rows(&mut console, &table, 3).expect("page");
    let out = output_of(console);

    assert!(out.contains("2017-01-04 08:27:49"));
    assert!(!out.contains("2017-03-06 13:49:38"));
}

#[test]
fn test_short_rows_keep_derived_columns_aligned() {
    let csv = "Start Time,Start Station,End Station,Trip Duration,User Type,Gender,Birth Year\n\
               2017-06-06 09:00:00,B,A,120,Customer\n";
    let table = bikeshare::core::loader::read_trips(csv.as_bytes(), "inline").expect("parse");
    let mut console = scripted("yes\n");

    page_rows(&mut console, &table, 5).expect("page");
    let out = output_of(console);

    let header = out.lines().find(|l| l.contains("day_of_week")).expect("header");
    let row = out
        .lines()
        .find(|l| l.contains("2017-06-06 09:00:00"))
        .expect("row printed");
    assert_eq!(row.find("Tuesday"), header.find("day_of_week"));
}
