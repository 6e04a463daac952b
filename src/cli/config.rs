use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{app::AppConfig, tracing::TracingConfig};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub tracing: TracingConfig,
}

pub struct EnvOverride {
    pub ignore_cache: Option<bool>,
}

impl Config {
    pub fn from_path(
        path: Option<impl AsRef<Path>>,
        EnvOverride { ignore_cache }: EnvOverride,
    ) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => {
                let config_file =
                    std::fs::read_to_string(path).context("Couldn't read config file")?;
                serde_yaml::from_str(&config_file).context("Couldn't parse config file")?
            }
            None => Config::default(),
        };

        if let Some(ignore_cache) = ignore_cache {
            config.app.ledger.ignore_cache = ignore_cache;
        }

        Ok(config)
    }
}
