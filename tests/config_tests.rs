use bikeshare::config::{Config, TotalTimeMode};
use bikeshare::errors::AppError;
use bikeshare::models::city::City;
use std::path::{Path, PathBuf};

mod common;
use common::{temp_path, write_config};

#[test]
fn test_missing_file_gives_defaults() {
    let conf = temp_path("config_defaults", "conf");
    let cfg = Config::load(Some(Path::new(&conf))).expect("load");

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.page_size, 5);
    assert_eq!(cfg.total_travel_time, TotalTimeMode::Max);
    assert_eq!(cfg.cities.len(), 3);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let conf = write_config("config_partial", "data_dir: /data/bikes\n");
    let cfg = Config::load(Some(Path::new(&conf))).expect("load");

    assert_eq!(cfg.data_dir, "/data/bikes");
    assert_eq!(cfg.page_size, 5);
    assert_eq!(
        cfg.source_for(City::NewYorkCity).expect("source"),
        PathBuf::from("/data/bikes/new_york_city.csv")
    );
}

#[test]
fn test_empty_file_is_all_defaults() {
    let conf = write_config("config_empty", "");
    let cfg = Config::load(Some(Path::new(&conf))).expect("load");
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_absolute_city_paths_are_kept() {
    let cfg = Config::from_yaml(
        "data_dir: /data\ncities:\n  chicago: /elsewhere/chi.csv\n  washington: dc.csv\n",
    )
    .expect("parse");

    assert_eq!(
        cfg.source_for(City::Chicago).unwrap(),
        PathBuf::from("/elsewhere/chi.csv")
    );
    assert_eq!(
        cfg.source_for(City::Washington).unwrap(),
        PathBuf::from("/data/dc.csv")
    );
    assert!(matches!(
        cfg.source_for(City::NewYorkCity),
        Err(AppError::UnknownCity(_))
    ));
}

#[test]
fn test_zero_page_size_is_rejected() {
    let conf = write_config("config_zero_page", "page_size: 0\n");
    let err = Config::load(Some(Path::new(&conf))).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_unknown_total_mode_is_rejected() {
    let err = Config::from_yaml("total_travel_time: median\n").unwrap_err();
    assert!(matches!(err, AppError::ConfigLoad(_)));
}

#[test]
fn test_yaml_round_trip_of_defaults() {
    let yaml = Config::default().to_yaml().expect("yaml");
    assert!(yaml.contains("total_travel_time: max"));
    assert_eq!(Config::from_yaml(&yaml).expect("parse"), Config::default());
}
