// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::storage::LocalStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Write the task file after every successful mutation instead of only
    /// on exit.
    #[serde(default = "default_true")]
    pub save_on_change: bool,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Print the task list right after startup.
    #[serde(default)]
    pub list_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            save_on_change: true,
            prompt: "> ".to_string(),
            list_on_start: false,
        }
    }
}

impl Config {
    /// Load the configuration from disk, falling back to defaults when the
    /// file does not exist yet. Read and parse failures are contextualized.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        LocalStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }

    /// Get the path string using an explicit context.
    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx.get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }
}
