use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::history::HistoryConfig;
use self::logging::LoggingConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod history;
pub mod logging;
pub mod translator;
pub mod ui;

pub use self::translator::ProviderKind;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub history: HistoryConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `LINGO_*` environment variables on top of the current values
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(timeout) = env_parse("LINGO_TIMEOUT_SECONDS") {
            self.translator.timeout_seconds = timeout;
        }

        if let Ok(source_lang) = env::var("LINGO_SOURCE_LANG") {
            self.translator.source_lang = source_lang;
        }

        if let Ok(dir) = env::var("LINGO_HISTORY_DIR") {
            self.history.storage_dir = Some(dir);
        }

        if let Some(max) = env_parse("LINGO_HISTORY_MAX") {
            self.history.max_entries = max;
        }

        if let Some(json) = env_parse("LINGO_LOG_JSON") {
            self.logging.json = json;
        }

        self
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
