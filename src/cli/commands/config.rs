use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::ui::messages::{error, info, success};
use std::fs::File;
use std::io::{self, Write};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let mut out = io::stdout();

        // ---- PRINT CONFIG ----
        if *print_config {
            writeln!(out, "📄 Current configuration:\n")?;
            writeln!(out, "{}", cfg.to_yaml()?)?;
        }

        // ---- CHECK DATA FILES ----
        if *check {
            check_sources(&mut out, cfg)?;
        }

        if !*print_config && !*check {
            info(
                &mut out,
                format!("Configuration file: {}", Config::config_file().display()),
            )?;
        }
    }

    Ok(())
}

/// Report, per city, whether its data file can be opened.
pub fn check_sources<W: Write>(out: &mut W, cfg: &Config) -> AppResult<()> {
    let mut missing = Vec::new();

    for city in City::ALL {
        match cfg.source_for(city) {
            Ok(path) => match File::open(&path) {
                Ok(_) => success(out, format!("{city}: {}", path.display()))?,
                Err(e) => {
                    error(out, format!("{city}: {} ({e})", path.display()))?;
                    missing.push(city.name());
                }
            },
            Err(e) => {
                error(out, format!("{city}: {e}"))?;
                missing.push(city.name());
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "data file not available for: {}",
            missing.join(", ")
        )))
    }
}
