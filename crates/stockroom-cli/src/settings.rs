//! Layered runtime settings: defaults, then the optional config file, then
//! `STOCKROOM_*` environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Runtime configuration, deserialised from `stockroom.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// Where the inventory table is persisted.
  pub inventory_path: PathBuf,
  /// Label printed before prices in the inventory listing.
  pub currency:       String,
}

impl Settings {
  pub fn load(config_file: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("inventory_path", "inventory.txt")?
      .set_default("currency", "Rs")?
      .add_source(config::File::from(config_file).required(false))
      .add_source(config::Environment::with_prefix("STOCKROOM"))
      .build()?
      .try_deserialize()
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  #[test]
  fn defaults_without_config_file() {
    let settings = Settings::load(Path::new("does-not-exist.toml")).unwrap();
    assert_eq!(settings.inventory_path, PathBuf::from("inventory.txt"));
    assert_eq!(settings.currency, "Rs");
  }

  #[test]
  fn config_file_overrides_defaults() {
    let path = std::env::temp_dir()
      .join(format!("stockroom-settings-{}.toml", std::process::id()));
    fs::write(&path, "inventory_path = \"/tmp/shop.txt\"\ncurrency = \"EUR\"\n")
      .unwrap();

    let settings = Settings::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(settings.inventory_path, PathBuf::from("/tmp/shop.txt"));
    assert_eq!(settings.currency, "EUR");
  }
}
