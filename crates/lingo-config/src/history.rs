use serde::{Deserialize, Serialize};

fn default_max_entries() -> usize {
    10
}

fn default_storage_key() -> String {
    "recentTranslations".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Name of the storage entry holding the history
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Directory for persisted state, platform data dir when unset
    pub storage_dir: Option<String>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            storage_key: default_storage_key(),
            storage_dir: None,
        }
    }
}
