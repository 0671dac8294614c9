use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::entity::Product;

const DEFAULT_PRODUCT: &str = "hack";

#[derive(Debug, Clone, Serialize, Deserialize, Default, Args, PartialEq, Eq)]
pub struct Config {
    /// The directory holding `<product>.json` index files.
    #[arg(short, long, global = true)]
    index_dir: Option<PathBuf>,
    /// The product whose reference docs are navigated.
    #[arg(short, long, global = true)]
    product: Option<String>,
}

static DEFAULT_INDEX_DIR: LazyLock<PathBuf> = LazyLock::new(default_index_dir);
fn default_index_dir() -> PathBuf {
    match xdg::BaseDirectories::with_prefix("apinav") {
        Ok(base_dir) => base_dir.get_data_home().join("indexes"),
        Err(_) => PathBuf::from("indexes"),
    }
}

impl Config {
    pub fn index_dir(&self) -> &Path {
        self.index_dir
            .as_deref()
            .unwrap_or(DEFAULT_INDEX_DIR.as_path())
    }

    pub fn product(&self) -> Product {
        Product::new(self.product.as_deref().unwrap_or(DEFAULT_PRODUCT))
    }

    /// Fields set in `other` win.
    pub fn extends(self, other: Config) -> Self {
        Self {
            index_dir: other.index_dir.or(self.index_dir),
            product: other.product.or(self.product),
        }
    }

    /// The config file overlaid with `from_args`.
    pub fn new(from_args: Config) -> Self {
        Self::new_from_file().extends(from_args)
    }

    fn new_from_file() -> Self {
        match Self::load_from_file() {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring config file: {:#}", e);
                Self::default()
            }
        }
    }

    fn load_from_file() -> anyhow::Result<Self> {
        let base_dir = xdg::BaseDirectories::with_prefix("apinav")?;
        let config_file = base_dir.get_config_file("config.toml");
        if config_file.exists() {
            Self::parse_file(&config_file)
        } else {
            Ok(Self::default())
        }
    }

    fn parse_file(path: &Path) -> anyhow::Result<Self> {
        let config = std::fs::read_to_string(path)?;
        let config = toml::from_str(&config)
            .map_err(|e| anyhow::anyhow!("Parse {}, err: {}", path.display(), e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.product(), Product::from("hack"));
        assert!(config.index_dir().ends_with("indexes"));
    }

    #[test]
    fn later_source_wins_per_field() {
        let file = Config {
            index_dir: Some("/srv/indexes".into()),
            product: Some("hsl".into()),
        };
        let args = Config {
            index_dir: None,
            product: Some("hack".into()),
        };
        let merged = file.extends(args);
        assert_eq!(merged.index_dir(), Path::new("/srv/indexes"));
        assert_eq!(merged.product(), Product::from("hack"));
    }

    #[test]
    fn parse_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "index_dir = \"/data/idx\"\nproduct = \"hsl\"\n").unwrap();
        let config = Config::parse_file(&path).unwrap();
        assert_eq!(config.index_dir(), Path::new("/data/idx"));
        assert_eq!(config.product(), Product::from("hsl"));
    }

    #[test]
    fn malformed_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "index_dir = [").unwrap();
        assert!(Config::parse_file(&path).is_err());
    }
}
