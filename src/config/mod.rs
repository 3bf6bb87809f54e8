pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::BotConfig;

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ircwarden")
        .join("config.toml")
}

pub fn load_config() -> Result<BotConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(BotConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: BotConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(config)
}
