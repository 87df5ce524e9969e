use lingo_types::{Language, TranslationRecord};

/// What the presentation layer renders
#[derive(Debug, Clone)]
pub struct UiState {
    pub input_text: String,
    pub translated_text: String,
    pub selected_language: Language,
    pub is_loading: bool,
    pub history: Vec<TranslationRecord>,
}

impl UiState {
    pub fn new(selected_language: Language) -> Self {
        Self {
            input_text: String::new(),
            translated_text: String::new(),
            selected_language,
            is_loading: false,
            history: Vec::new(),
        }
    }
}
