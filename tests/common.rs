#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::config::Config;
use bikeshare::core::loader::read_trips;
use bikeshare::models::city::City;
use bikeshare::models::trip::TripTable;
use bikeshare::ui::prompt::Console;
use std::env;
use std::fs::{self, File};
use std::io::Cursor;
use std::path::PathBuf;

pub fn bks() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Directory holding the small Chicago / New York City / Washington CSVs
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixtures_dir_str() -> String {
    fixtures_dir().to_string_lossy().to_string()
}

/// Config pointing at the fixtures, everything else default
pub fn fixture_config() -> Config {
    Config {
        data_dir: fixtures_dir_str(),
        ..Config::default()
    }
}

/// Parse a fixture CSV without filters
pub fn load_fixture(city: City) -> TripTable {
    let path = fixtures_dir().join(city.default_file());
    let file = File::open(&path).expect("open fixture");
    read_trips(file, &path.to_string_lossy()).expect("parse fixture")
}

/// Unique path inside the system temp dir; any existing file is removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikeshare.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a YAML config file in the temp dir and return its path
pub fn write_config(name: &str, yaml: &str) -> String {
    let p = temp_path(name, "conf");
    fs::write(&p, yaml).expect("write config");
    p
}

/// Console reading the given answers and writing into a buffer
pub fn scripted(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).expect("utf8 output")
}
