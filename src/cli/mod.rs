//! CLI for the roster registry
//!
//! - `serve`: run the HTTP server
//! - `check-config`: load and validate configuration, then exit

pub mod check_config;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Roster Registry - team and player registration for esports tournaments
#[derive(Parser)]
#[command(name = "roster-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Validate configuration and print the effective settings
    CheckConfig,
}

/// Load `.env`, then layered configuration, then validate it
pub fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    config.validate()?;

    Ok(config)
}
