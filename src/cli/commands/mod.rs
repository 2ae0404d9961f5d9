pub mod config;
pub mod explore;
