use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::{demo::Demo, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Upper bound for the initial number of widgets
pub const MAX_COUNTERS: usize = 1024;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub demo: Demo,
    #[serde(default)]
    pub counters: usize,
    #[serde(default)]
    pub echo_state: bool,
}

impl Config {
    /// Load the embedded defaults overlaid by any config file in the config directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dir(&utils::get_config_dir())
    }

    /// Defaults shipped inside the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn from_dir(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();

        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?
            .set_default("demo", default_config.demo.to_string())?
            .set_default("counters", default_config.counters as u64)?
            .set_default("echo_state", default_config.echo_state)?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                tracing::info!(path = %path.display(), "loading config file");
                found_config = true;
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            tracing::debug!(dir = %config_dir.display(), "no config file found, using defaults");
        }

        let cfg: Self = builder.build()?.try_deserialize()?;

        if cfg.counters > MAX_COUNTERS {
            return Err(ConfigError::Message(format!(
                "counters must be at most {MAX_COUNTERS}, got {}",
                cfg.counters
            )));
        }

        Ok(cfg)
    }
}
