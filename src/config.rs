use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;
use uisamples_inventory::{InventoryStore, PickupTable, MAX_SLOTS};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config/uisamples.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    pub inventory: InventoryConfig,
    /// Rows handed out by the "pick up" action, cycled by item count.
    pub pickup: PickupTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Number of inventory slots.
    pub max_slots: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            max_slots: MAX_SLOTS,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            inventory: InventoryConfig::default(),
            pickup: PickupTable::default(),
        }
    }
}

impl SessionConfig {
    /// Load session configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err:#}. Using defaults", path.display());
                    SessionConfig::default()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!(
                        "Session config not found at {}. Using defaults",
                        path.display()
                    );
                }
                SessionConfig::default()
            }
        }
    }

    /// Load configuration from `path`, returning errors to the caller.
    pub fn load_strict(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: SessionConfig = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the inventory cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.inventory.max_slots == 0 {
            anyhow::bail!("inventory.max_slots must be at least 1");
        }
        Ok(())
    }

    /// Build an empty store sized by this config.
    pub fn build_store(&self) -> Result<InventoryStore> {
        Ok(InventoryStore::with_capacity(self.inventory.max_slots)?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let cfg = SessionConfig::from_toml("[inventory]\nmax_slots = 4\n").expect("config parses");

        assert_eq!(cfg.inventory.max_slots, 4);
        assert_eq!(cfg.pickup, PickupTable::default());
        assert_eq!(cfg.build_store().expect("store").capacity(), 4);
    }

    #[test]
    fn custom_pickup_table_is_read() {
        let cfg = SessionConfig::from_toml(
            r#"
[[pickup]]
name = "Gem"
description = "A glittering gem"

[[pickup]]
name = "Rope"
"#,
        )
        .expect("config parses");

        assert_eq!(cfg.inventory.max_slots, MAX_SLOTS);
        assert_eq!(cfg.pickup.len(), 2);
        assert_eq!(cfg.pickup.entry_for(1).name, "Rope");
        assert_eq!(cfg.pickup.entry_for(1).description, "");
    }

    #[test]
    fn zero_slots_rejected() {
        let err = SessionConfig::from_toml("[inventory]\nmax_slots = 0\n").unwrap_err();
        assert!(
            err.to_string().contains("max_slots"),
            "unexpected error: {err:#}"
        );
    }

    #[test]
    fn empty_pickup_table_rejected() {
        assert!(SessionConfig::from_toml("pickup = []\n").is_err());
    }

    #[test]
    fn missing_or_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.toml");
        assert_eq!(SessionConfig::load_from_path(&missing), SessionConfig::default());

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "inventory = 3").expect("write broken config");
        assert_eq!(SessionConfig::load_from_path(&broken), SessionConfig::default());
        assert!(SessionConfig::load_strict(&broken).is_err());
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("uisamples.toml");
        let mut cfg = SessionConfig::default();
        cfg.inventory.max_slots = 3;

        cfg.save_to_path(&path).expect("save config");

        assert_eq!(SessionConfig::load_strict(&path).expect("load config"), cfg);
    }
}
