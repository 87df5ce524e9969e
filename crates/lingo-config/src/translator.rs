use serde::{Deserialize, Serialize};

/// Known translation backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    MyMemory,
}

fn default_providers() -> Vec<ProviderKind> {
    vec![ProviderKind::Google, ProviderKind::MyMemory]
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_google_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_mymemory_url() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Providers in fallback order, primary first
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderKind>,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_google_url")]
    pub google_url: String,
    #[serde(default = "default_mymemory_url")]
    pub mymemory_url: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            source_lang: default_source_lang(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
            google_url: default_google_url(),
            mymemory_url: default_mymemory_url(),
        }
    }
}
