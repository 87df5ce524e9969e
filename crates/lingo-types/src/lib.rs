pub mod types;

pub use types::{AppEvent, Language, LanguageCode, TranslationRecord};
