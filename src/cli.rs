use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Browse and search rentable electronics from the terminal.
#[derive(Debug, Parser)]
#[command(name = "rentcat", version, about)]
pub struct Cli {
    /// Path to config file (default: ~/.config/rentcat/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the marketplace API base URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Start with this category selected (e.g. laptops, cameras)
    #[arg(long, value_name = "ID")]
    pub category: Option<String>,
}

impl Cli {
    /// Load the config file named on the command line (or the default one)
    /// and apply CLI overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}
