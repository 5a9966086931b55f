use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::Context;
use log::debug;
use serde::Deserialize;

use crate::{cli::CommonArgs, error::MyError, CONFIG_FILE_PATH};

/// Site configuration, read from `_config.toml` when present. Unknown keys
/// are ignored.
#[derive(Deserialize, Debug, Default)]
pub struct SiteConfig {
  /// Root directory for all content folders. Empty means the working
  /// directory.
  #[serde(default)]
  pub source: String,
}

impl SiteConfig {
  pub fn load(path: &Path) -> Result<Self, MyError> {
    if !path.exists() {
      debug!("no config file at {path:?}, using defaults");
      return Ok(Self::default());
    }
    let content = fs::read_to_string(path).context("Could not read config file")?;
    let config = toml::from_str(&content)?;
    debug!("loaded config from {path:?}: {config:?}");
    Ok(config)
  }

  /// Resolve the source directory for one invocation, the command-line flag
  /// winning over the config file.
  pub fn resolve_source(args: &CommonArgs) -> Result<String, MyError> {
    if let Some(source) = &args.source {
      return Ok(source.clone());
    }
    let config_path =
      args.config.clone().unwrap_or_else(|| PathBuf::from(CONFIG_FILE_PATH));
    Ok(Self::load(&config_path)?.source)
  }
}
