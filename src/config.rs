use serde::Deserialize;
use std::path::Path;

use crate::casing::Casing;
use crate::cli::Cli;
use crate::error::Result;
use crate::generator::GeneratorConfig;

/// Defaults read from an optional TOML file. Command-line flags win.
#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_casing")]
    pub casing: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default = "default_quantity")]
    pub quantity: usize,
    #[serde(default)]
    pub seed: Option<i64>,
}

fn default_casing() -> String {
    Casing::default().to_string()
}

fn default_delimiter() -> String {
    "-".to_string()
}

fn default_size() -> usize {
    2
}

fn default_quantity() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Config {
            casing: default_casing(),
            delimiter: default_delimiter(),
            size: default_size(),
            quantity: default_quantity(),
            seed: None,
        }
    }
}

pub fn read_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Everything a run needs: how to build the generator and how many names.
#[derive(Debug, PartialEq)]
pub struct Settings {
    pub generator: GeneratorConfig,
    pub quantity: usize,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: Config) -> Result<Settings> {
        let casing = cli.casing.as_deref().unwrap_or(&config.casing).parse::<Casing>()?;

        Ok(Settings {
            generator: GeneratorConfig {
                casing,
                delimiter: cli.delimiter.clone().unwrap_or(config.delimiter),
                size: cli.size.unwrap_or(config.size),
                seed: cli.seed.or(config.seed),
            },
            quantity: cli.quantity.unwrap_or(config.quantity),
        })
    }
}
