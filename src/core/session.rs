//! Interactive session: collect the selection, load the table, print the
//! four reports, page the rows, offer a restart.

use crate::config::Config;
use crate::core::calculator::{
    duration::duration_stats, stations::station_stats, time::time_stats, users::user_stats,
};
use crate::core::loader::load_table;
use crate::core::pager::page_rows;
use crate::errors::AppResult;
use crate::models::city::City;
use crate::models::filters::{DayFilter, MonthFilter, Selection};
use crate::models::trip::TripTable;
use crate::ui::prompt::Console;
use crate::ui::report::{
    print_duration_stats, print_station_stats, print_time_stats, print_user_stats, section_end,
    section_start,
};
use crate::utils::formatting::separator;
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::{debug, info};

const CITY_PROMPT: &str =
    "Enter the name of the city you want to explore (chicago, new york city, washington): ";
const MONTH_PROMPT: &str =
    "Enter the month you would like to analyze (January - June, or 'all' for every month): ";
const DAY_PROMPT: &str =
    "Enter the weekday you would like to analyze (Monday - Sunday, or 'all' for the whole week): ";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Prompt for city, month and day. Each prompt repeats until the answer is
/// valid. `None` when the input ends before all three are given.
pub fn collect_selection<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> AppResult<Option<Selection>> {
    writeln!(console.out(), "Hello! This is the US Bikeshare Analytics Program.")?;
    writeln!(console.out(), "Let's explore some bikeshare data!\n")?;

    let Some(city) = console.ask_until(
        CITY_PROMPT,
        "Ooops. That is not a valid city name. Please enter a valid city name.",
        City::from_input,
    )?
    else {
        return Ok(None);
    };

    let Some(month) = console.ask_until(
        MONTH_PROMPT,
        "Ooops. That is not a valid month. Please enter a valid month.",
        MonthFilter::from_input,
    )?
    else {
        return Ok(None);
    };

    let Some(day) = console.ask_until(
        DAY_PROMPT,
        "Ooops. That is not a weekday. Please enter a weekday.",
        DayFilter::from_input,
    )?
    else {
        return Ok(None);
    };

    writeln!(console.out(), "{}", separator())?;
    Ok(Some(Selection { city, month, day }))
}

/// Print the four statistics sections, in fixed order, each timed.
pub fn report<W: Write>(out: &mut W, cfg: &Config, table: &TripTable) -> AppResult<()> {
    let start = Instant::now();
    section_start(out, "Calculating The Most Frequent Times of Travel")?;
    print_time_stats(out, &time_stats(table))?;
    section_end(out, start.elapsed())?;
    debug!(elapsed = ?start.elapsed(), "time stats");

    let start = Instant::now();
    section_start(out, "Calculating The Most Popular Stations and Trip")?;
    print_station_stats(out, &station_stats(table))?;
    section_end(out, start.elapsed())?;
    debug!(elapsed = ?start.elapsed(), "station stats");

    let start = Instant::now();
    section_start(out, "Calculating Trip Duration")?;
    print_duration_stats(out, &duration_stats(table), cfg.total_travel_time)?;
    section_end(out, start.elapsed())?;
    debug!(elapsed = ?start.elapsed(), "duration stats");

    let start = Instant::now();
    section_start(out, "Calculating User Stats")?;
    print_user_stats(out, &user_stats(table))?;
    section_end(out, start.elapsed())?;
    debug!(elapsed = ?start.elapsed(), "user stats");

    Ok(())
}

/// Session loop. Every iteration starts from scratch; it repeats while the
/// restart answer is `yes`.
pub fn explore<R: BufRead, W: Write>(cfg: &Config, console: &mut Console<R, W>) -> AppResult<()> {
    loop {
        let Some(selection) = collect_selection(console)? else {
            break;
        };
        info!(
            city = %selection.city,
            month = %selection.month,
            day = %selection.day,
            "selection"
        );

        let table = load_table(cfg, &selection)?;
        report(console.out(), cfg, &table)?;
        page_rows(console, &table, cfg.page_size)?;

        if console.answer_is(RESTART_PROMPT, "yes")? != Some(true) {
            break;
        }
    }

    Ok(())
}
