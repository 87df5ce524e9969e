use lingo_config::ProviderKind;
use lingo_config::translator::TranslatorConfig;

use crate::{
    GoogleProvider, MyMemoryProvider, ProviderError, TranslateError, TranslationProvider,
};

/// Fallback chain over an ordered list of providers
#[derive(Default)]
pub struct TranslationOrchestrator {
    providers: Vec<Box<dyn TranslationProvider>>,
}

impl TranslationOrchestrator {
    pub fn new(providers: Vec<Box<dyn TranslationProvider>>) -> Self {
        Self { providers }
    }

    /// Build the configured providers, in configured order
    pub fn from_config(config: &TranslatorConfig) -> Result<Self, ProviderError> {
        let mut providers: Vec<Box<dyn TranslationProvider>> = Vec::new();

        for kind in &config.providers {
            match kind {
                ProviderKind::Google => {
                    providers.push(Box::new(GoogleProvider::from_config(config)?));
                }
                ProviderKind::MyMemory => {
                    providers.push(Box::new(MyMemoryProvider::from_config(config)?));
                }
            }
        }

        Ok(Self::new(providers))
    }

    /// Append a provider at the lowest priority
    pub fn add_provider(&mut self, provider: Box<dyn TranslationProvider>) {
        self.providers.push(provider);
    }

    /// Remove the provider at `index`; out of range is a no-op
    pub fn remove_provider(&mut self, index: usize) -> Option<Box<dyn TranslationProvider>> {
        if index < self.providers.len() {
            Some(self.providers.remove(index))
        } else {
            None
        }
    }

    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.metadata().name).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Try each provider in order and return the first non-blank translation
    pub async fn translate(&self, text: &str, to: &str) -> Result<String, TranslateError> {
        let mut last_error: Option<ProviderError> = None;

        for provider in &self.providers {
            let name = provider.metadata().name;

            match provider.translate(text, to).await {
                Ok(translated) if !translated.trim().is_empty() => {
                    tracing::debug!("{name} translated {} chars", text.len());
                    return Ok(translated);
                }
                // Suspect: a blank success may hide a provider bug, but we still fall through
                Ok(_) => {
                    tracing::warn!("{name} returned a blank translation, trying next provider");
                }
                Err(e) => {
                    tracing::warn!("{name} failed, trying next provider: {e}");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .map(TranslateError::Exhausted)
            .unwrap_or(TranslateError::Unavailable))
    }
}
