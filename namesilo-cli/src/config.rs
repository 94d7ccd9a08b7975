//! CLI configuration: JSON config file plus flag / environment overrides,
//! resolved into a [`ProviderConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use namesilo_provider::ProviderConfig;
use serde::Deserialize;

use crate::cli::GlobalOpts;

const APP_DIR_NAME: &str = "namesilo";
const CONFIG_FILE_NAME: &str = "config.json";

/// On-disk configuration; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Default config file location: `<config_dir>/namesilo/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Reads a config file. A missing default file yields an empty config,
/// a missing explicit file is an error.
pub fn load_file(path: &Path, explicit: bool) -> Result<FileConfig> {
    if !path.exists() {
        if explicit {
            bail!("config file not found: {}", path.display());
        }
        tracing::debug!("no config file at {}", path.display());
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid config file {}", path.display()))
}

/// Merges flag / env values over the file values.
pub fn resolve(global: &GlobalOpts, file: FileConfig) -> Result<ProviderConfig> {
    let api_key = global
        .api_key
        .clone()
        .or(file.api_key)
        .filter(|key| !key.trim().is_empty());

    let Some(api_key) = api_key else {
        bail!("no API key: pass --api-key, set NAMESILO_API_KEY, or add apiKey to the config file");
    };

    let mut config = ProviderConfig::new(api_key);
    config.api_base = file.api_base;
    if let Some(timeout_secs) = file.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    Ok(config)
}

/// Loads and resolves the configuration for this invocation.
pub fn load(global: &GlobalOpts) -> Result<ProviderConfig> {
    let file = match &global.config {
        Some(path) => load_file(path, true)?,
        None => match default_config_path() {
            Some(path) => load_file(&path, false)?,
            None => FileConfig::default(),
        },
    };
    resolve(global, file)
}
