// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::model::SortOrder;
use crate::model::dates;
use crate::storage::LocalStorage;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

fn default_date_format() -> String {
    dates::DISPLAY_FORMAT.to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Overrides the snapshot location in the data directory.
    #[serde(default)]
    pub snapshot_path: Option<String>,
    /// Sort order applied on startup and restored by reset.
    #[serde(default)]
    pub default_order: SortOrder,
    /// strftime format for displayed event dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Per-code overrides merged over the built-in subject label table.
    #[serde(default)]
    pub subject_labels: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            default_order: SortOrder::default(),
            // Match the serde defaults
            date_format: default_date_format(),
            subject_labels: HashMap::new(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        // Explicitly detect missing file so callers (first run) can behave accordingly.
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Helper to detect whether an anyhow::Error indicates that the config
    /// file was missing, as opposed to unreadable or malformed.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
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

    /// Where to look for the snapshot: the config override wins, otherwise
    /// the context's default location.
    pub fn resolve_snapshot_path(&self, ctx: &dyn AppContext) -> Option<PathBuf> {
        match &self.snapshot_path {
            Some(p) => Some(PathBuf::from(p)),
            None => ctx.get_snapshot_path(),
        }
    }
}
