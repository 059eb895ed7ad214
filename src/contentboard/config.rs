use crate::error::{BoardError, Result};
use crate::ordering::MergeStrategy;
use crate::store::is_valid_key;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORAGE_KEY: &str = "contents";

/// Board configuration, stored in .contentboard/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    /// Key the record blob is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// How a reorder of a filtered view is merged into the full order
    #[serde(default)]
    pub merge_strategy: MergeStrategy,

    /// Whether saving a record clears its "new" marker
    #[serde(default = "default_true")]
    pub clear_new_on_save: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            merge_strategy: MergeStrategy::default(),
            clear_new_on_save: true,
        }
    }
}

impl BoardConfig {
    pub const KEYS: [&'static str; 3] = ["storage-key", "merge-strategy", "clear-new-on-save"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BoardError::Io)?;
        let config: BoardConfig =
            serde_json::from_str(&content).map_err(BoardError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BoardError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BoardError::Serialization)?;
        fs::write(config_path, content).map_err(BoardError::Io)?;
        Ok(())
    }

    /// Display value of a config key, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "merge-strategy" => Some(self.merge_strategy.to_string()),
            "clear-new-on-save" => Some(self.clear_new_on_save.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("storage-key cannot be empty".to_string());
                }
                if !is_valid_key(value) {
                    return Err(format!(
                        "Invalid storage key: '{}' (letters, digits, '-', '_' and '.' only, not starting with '.')",
                        value
                    ));
                }
                self.storage_key = value.to_string();
            }
            "merge-strategy" => self.merge_strategy = value.parse()?,
            "clear-new-on-save" => {
                self.clear_new_on_save = value.trim().parse().map_err(|_| {
                    format!("Invalid value '{}' for clear-new-on-save (expected true or false)", value)
                })?
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// All keys with their display values, in a stable order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}
