use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::utils::path::{expand_tilde, resolve_in};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What the "total travel time" line reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalTimeMode {
    /// Longest single trip (historical behavior of the report)
    #[default]
    Max,
    /// Sum of all trip durations
    Sum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_cities")]
    pub cities: BTreeMap<String, String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub total_travel_time: TotalTimeMode,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_cities() -> BTreeMap<String, String> {
    City::ALL
        .iter()
        .map(|c| (c.name().to_string(), c.default_file().to_string()))
        .collect()
}
fn default_page_size() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cities: default_cities(),
            page_size: default_page_size(),
            total_travel_time: TotalTimeMode::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("bikeshare")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".bikeshare")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikeshare.conf")
    }

    /// Load configuration from `path` (or the default location), or return
    /// defaults if the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map_or_else(Self::config_file, Path::to_path_buf);

        let cfg = if path.exists() {
            debug!(path = %path.display(), "reading configuration");
            let content = fs::read_to_string(&path)
                .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
            Self::from_yaml(&content)?
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Config::default()
        };

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file is a valid "all defaults" configuration
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be greater than 0".into()));
        }
        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Path of the CSV source configured for `city`.
    pub fn source_for(&self, city: City) -> AppResult<PathBuf> {
        let file = self
            .cities
            .get(city.name())
            .ok_or_else(|| AppError::UnknownCity(city.name().to_string()))?;
        Ok(resolve_in(&self.data_dir(), file))
    }
}
