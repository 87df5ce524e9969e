use std::sync::Arc;

use lingo_config::Config;
use lingo_core::{FileStore, HistoryStore, language};
use lingo_translator::{ProviderError, TranslateError, TranslationOrchestrator};
use lingo_types::{Language, TranslationRecord};

use crate::profile;
use crate::state::UiState;

const NETWORK_MESSAGE: &str = "Network error. Please check your internet connection and try again.";
const RATE_LIMIT_MESSAGE: &str = "Too many requests. Please wait a moment and try again.";
const GENERIC_MESSAGE: &str = "Failed to translate text. Please try again.";

/// User-visible failures of a translate request
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Please enter some text to translate")]
    EmptyInput,

    #[error(transparent)]
    Translation(#[from] TranslateError),
}

impl SessionError {
    pub fn title(&self) -> &'static str {
        match self {
            SessionError::EmptyInput => "Error",
            SessionError::Translation(_) => "Translation Error",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            SessionError::Translation(TranslateError::Exhausted(err)) => describe_failure(err),
            other => other.to_string(),
        }
    }
}

/// Explicit message first, then transport code, then rate limiting
pub fn describe_failure(err: &ProviderError) -> String {
    if !err.message.is_empty() {
        err.message.clone()
    } else if err.code.is_some_and(|code| code.is_network()) {
        NETWORK_MESSAGE.to_string()
    } else if err.is_rate_limited() {
        RATE_LIMIT_MESSAGE.to_string()
    } else {
        GENERIC_MESSAGE.to_string()
    }
}

/// Holds UI state and drives translation and history in response to user intents
pub struct TranslationSession {
    state: UiState,
    orchestrator: TranslationOrchestrator,
    history: HistoryStore,
}

impl TranslationSession {
    pub fn new(
        orchestrator: TranslationOrchestrator,
        history: HistoryStore,
        language: Language,
    ) -> Self {
        Self {
            state: UiState::new(language),
            orchestrator,
            history,
        }
    }

    /// Wire providers, file-backed history and the startup language from config
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let orchestrator = TranslationOrchestrator::from_config(&config.translator)?;
        if orchestrator.is_empty() {
            tracing::warn!("No translation providers configured, every request will fail");
        } else {
            tracing::info!("Translation providers: {:?}", orchestrator.provider_names());
        }

        let storage_dir = profile::history_dir(&config.history)?;
        tracing::info!("History stored in {}", storage_dir.display());
        let store = Arc::new(FileStore::new(storage_dir));
        let history = HistoryStore::from_config(store, &config.history);

        let language = language::find(&config.ui.default_language).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown default language '{}', using English",
                config.ui.default_language
            );
            language::default_language()
        });

        Ok(Self::new(orchestrator, history, language))
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn has_input(&self) -> bool {
        !self.state.input_text.trim().is_empty()
    }

    pub async fn load_history(&mut self) -> &[TranslationRecord] {
        self.state.history = self.history.load().await;
        &self.state.history
    }

    pub fn set_input(&mut self, text: String) {
        self.state.input_text = text;
    }

    /// Select a catalog language; unknown codes leave the selection unchanged
    pub fn select_language(&mut self, code: &str) -> Option<&Language> {
        let language = language::find(code)?;
        self.state.selected_language = language;
        Some(&self.state.selected_language)
    }

    pub async fn translate_text(&mut self) -> Result<TranslationRecord, SessionError> {
        if !self.has_input() {
            return Err(SessionError::EmptyInput);
        }

        self.state.is_loading = true;
        let result = self.run_translation().await;
        self.state.is_loading = false;

        if let Err(e) = &result {
            tracing::error!("Translation error: {e}");
        }

        result
    }

    async fn run_translation(&mut self) -> Result<TranslationRecord, SessionError> {
        let text = self.state.input_text.clone();
        let language = self.state.selected_language.clone();

        let translated = self.orchestrator.translate(&text, &language.code).await?;
        self.state.translated_text = translated.clone();

        let record = TranslationRecord::new(text, translated, language.name);
        if let lingo_core::WriteOutcome::Skipped(e) = self.history.save(record.clone()).await {
            tracing::debug!("Translation not recorded in history: {e}");
        }
        self.load_history().await;

        Ok(record)
    }

    pub fn clear_text(&mut self) {
        self.state.input_text.clear();
        self.state.translated_text.clear();
    }

    pub async fn clear_history(&mut self) -> &[TranslationRecord] {
        let _ = self.history.clear().await;
        self.load_history().await
    }

    /// Clipboard access is not wired up; returns the notice to show
    pub fn copy_to_clipboard(&self, text: &str) -> String {
        tracing::debug!("Copy requested for {} chars", text.len());
        "Copied! Text copied to clipboard".to_string()
    }

    /// Speech output is not wired up; returns the notice to show
    pub fn speak(&self, text: &str) -> String {
        if text.is_empty() {
            return "Nothing to speak".to_string();
        }
        tracing::debug!(
            "Speak requested in {}: {} chars",
            self.state.selected_language.code,
            text.len()
        );
        format!("Speaking ({}): {text}", self.state.selected_language.name)
    }
}
