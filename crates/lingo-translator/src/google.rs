use std::time::Duration;

use async_trait::async_trait;
use lingo_config::translator::TranslatorConfig;
use serde_json::Value;

use crate::{ProviderError, ProviderMetadata, TranslationProvider};

/// Google Translate web endpoint (`translate_a/single`, no API key)
#[derive(Clone)]
pub struct GoogleProvider {
    client: reqwest::Client,
    api_url: String,
    source_lang: String,
}

impl GoogleProvider {
    pub fn new(
        api_url: String,
        source_lang: String,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url,
            source_lang,
        })
    }

    pub fn from_config(config: &TranslatorConfig) -> Result<Self, ProviderError> {
        Self::new(
            config.google_url.clone(),
            config.source_lang.clone(),
            Duration::from_secs(config.timeout_seconds),
            &config.user_agent,
        )
    }
}

#[async_trait]
impl TranslationProvider for GoogleProvider {
    async fn translate(&self, text: &str, to: &str) -> Result<String, ProviderError> {
        let params = [
            ("client", "gtx"),
            ("sl", self.source_lang.as_str()),
            ("tl", to),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let json: Value = response.json().await?;

        join_segments(&json)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// Response looks like `[[["Hola", "Hello", ...], ["mundo", "world", ...]], null, "en"]`.
/// The translated fragment is the first element of every segment.
fn join_segments(json: &Value) -> Result<String, ProviderError> {
    let segments = json
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::bad_response("No translation from Google Translate"))?;

    let fragments: Vec<&str> = segments
        .iter()
        // Only string fragments count as text
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .filter(|fragment| !fragment.is_empty())
        .collect();

    if fragments.is_empty() {
        return Err(ProviderError::bad_response(
            "No translation from Google Translate",
        ));
    }

    Ok(fragments.join(" "))
}
