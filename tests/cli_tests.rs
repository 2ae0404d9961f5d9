use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bks, fixtures_dir_str, temp_path, write_config};

#[test]
fn test_session_chicago_all() {
    let conf = temp_path("session_chicago_all", "conf");

    bks()
        .args(["--config", &conf, "--data-dir", &fixtures_dir_str()])
        .write_stdin("chicago\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("The most common month is: June"))
        .stdout(contains("Streeter Dr & Grand Ave"))
        .stdout(contains("The total travel time is: 2400.0 seconds"))
        .stdout(contains("Subscriber"));
}

#[test]
fn test_explore_subcommand_is_the_default() {
    let conf = temp_path("explore_subcommand", "conf");

    bks()
        .args(["--config", &conf, "--data-dir", &fixtures_dir_str(), "explore"])
        .write_stdin("washington\njune\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("No data about gender in data set found."))
        .stdout(contains("No data about birth year in data set found."));
}

#[test]
fn test_invalid_answers_are_reprompted() {
    let conf = temp_path("invalid_answers", "conf");

    bks()
        .args(["--config", &conf, "--data-dir", &fixtures_dir_str()])
        .write_stdin("boston\nchicago\nthirteenth\nall\nsomeday\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("That is not a valid city name"))
        .stdout(contains("That is not a valid month"))
        .stdout(contains("That is not a weekday"))
        .stdout(contains("The most common day is: Monday"));
}

#[test]
fn test_empty_filter_result_completes() {
    let conf = temp_path("empty_filter", "conf");

    bks()
        .args(["--config", &conf, "--data-dir", &fixtures_dir_str()])
        .write_stdin("chicago\njanuary\nfriday\nyes\nno\n")
        .assert()
        .success()
        .stdout(contains("No data available for the selected filters."))
        .stdout(contains("No rows to display."));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let conf = temp_path("end_of_input", "conf");

    bks()
        .args(["--config", &conf, "--data-dir", &fixtures_dir_str()])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Calculating").not());
}

#[test]
fn test_missing_data_file_fails() {
    let conf = temp_path("missing_data_file", "conf");

    bks()
        .args(["--config", &conf, "--data-dir", "/definitely/not/here"])
        .write_stdin("chicago\nall\nall\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:"))
        .stderr(contains("chicago.csv"));
}

#[test]
fn test_config_file_sets_page_size_and_total_mode() {
    let conf = write_config(
        "page_size_and_total",
        &format!(
            "data_dir: \"{}\"\npage_size: 2\ntotal_travel_time: sum\n",
            fixtures_dir_str()
        ),
    );

    bks()
        .args(["--config", &conf])
        .write_stdin("chicago\nall\nall\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Would you like to view 2 rows"))
        .stdout(contains("The total travel time is: 10151.0 seconds"))
        .stdout(contains("2017-05-25 18:19:03"))
        .stdout(contains("2017-01-04 08:27:49").not());
}

#[test]
fn test_invalid_config_is_reported() {
    let conf = write_config("invalid_config", "page_size: 0\n");

    bks()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("page_size must be greater than 0"));
}

#[test]
fn test_config_print() {
    let conf = temp_path("config_print", "conf");

    bks()
        .args(["--config", &conf, "--data-dir", "/srv/bikeshare", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("data_dir: /srv/bikeshare"))
        .stdout(contains("page_size: 5"))
        .stdout(contains("total_travel_time: max"))
        .stdout(contains("new york city: new_york_city.csv"));
}

#[test]
fn test_config_check_with_fixtures() {
    let conf = temp_path("config_check_ok", "conf");

    bks()
        .args(["--config", &conf, "--data-dir", &fixtures_dir_str(), "config", "--check"])
        .assert()
        .success()
        .stdout(contains("washington.csv"));
}

#[test]
fn test_config_check_with_missing_files() {
    let conf = temp_path("config_check_missing", "conf");

    bks()
        .args(["--config", &conf, "--data-dir", "/definitely/not/here", "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("data file not available for: chicago, new york city, washington"));
}
