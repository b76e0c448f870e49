use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use serde::Deserialize;

use crate::seq::StorageKind;

#[derive(Debug, Default, Deserialize)]
struct RawMaskSettings {
    average: bool,
}

#[derive(Debug)]
pub struct Settings {
    /// Container used for images opened or created by the tools.
    pub storage: StorageKind,
    /// Whether masking averages by default (as opposed to clamping the plain weighted sum).
    pub mask_average: bool,
}

impl Settings {
    pub fn config_builder() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(
            include_str!("settings_default.toml"),
            FileFormat::Toml,
        ))
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Settings> {
        let mask: RawMaskSettings = config.get("mask")?;
        Ok(Settings {
            storage: config.get("storage")?,
            mask_average: mask.average,
        })
    }
}
