use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Short language identifier ("en", "es", ...)
pub type LanguageCode = String;

/// A language the user can translate into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: LanguageCode,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// One successful translation, as kept in history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub original: String,
    pub translated: String,
    /// Display name of the target language
    pub language: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl TranslationRecord {
    /// Create a record stamped with the current time.
    ///
    /// The timestamp is truncated to milliseconds, the precision it is persisted with.
    pub fn new(original: String, translated: String, language: String) -> Self {
        Self::at(original, translated, language, Utc::now())
    }

    pub fn at(
        original: String,
        translated: String,
        language: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            original,
            translated,
            language,
            timestamp: timestamp.trunc_subsecs(3),
        }
    }
}

/// Messages exchanged between the presentation layer and the app controller
#[derive(Debug, Clone)]
pub enum AppEvent {
    // Presentation -> app
    TextInput(String),
    SelectLanguage(LanguageCode),
    Translate,
    ClearText,
    ClearHistory,
    ShowHistoryRequest,
    ListLanguages,
    Copy,
    Speak,
    Shutdown,

    // App -> presentation
    BackendReady {
        language: Language,
        history: Vec<TranslationRecord>,
    },
    Loading(bool),
    ShowTranslation {
        original: String,
        translated: String,
        language: Language,
    },
    ShowHistory(Vec<TranslationRecord>),
    ShowLanguages(Vec<Language>),
    LanguageSelected(Language),
    TextCleared,
    ShowError {
        title: String,
        message: String,
    },
    Notice(String),
}
