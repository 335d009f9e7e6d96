use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::presentation::{
    config::{KeyBindings, Styles},
    layout::LayoutVariant,
};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub layout: LayoutVariant,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
}

impl Config {
    /// Loads the user config from the config directory on top of the
    /// built-in defaults. Every config file is optional.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?
            .set_default("layout", default_config.layout.to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            tracing::info!(
                dir = %config_dir.display(),
                "no configuration file found, using defaults"
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(*key)
                .or_insert_with(|| action.clone());
        }
        cfg.styles.merge_defaults(&default_config.styles);

        Ok(cfg)
    }
}
