use clap::{Parser, Subcommand};

/// Command-line interface definition for bikeshare
/// Interactive explorer for US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: travel times, popular stations, trip durations and user stats",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the city CSV files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Start the interactive session (default)
    Explore,

    /// Inspect the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check that every city's data file exists and is readable"
        )]
        check: bool,
    },
}
