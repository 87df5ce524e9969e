use std::time::Duration;

use async_trait::async_trait;
use lingo_config::translator::TranslatorConfig;
use serde::Deserialize;

use crate::{ProviderError, ProviderMetadata, TranslationProvider};

/// MyMemory public translation API
#[derive(Clone)]
pub struct MyMemoryProvider {
    client: reqwest::Client,
    api_url: String,
    source_lang: String,
}

impl MyMemoryProvider {
    pub fn new(api_url: String, source_lang: String, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url,
            source_lang,
        })
    }

    pub fn from_config(config: &TranslatorConfig) -> Result<Self, ProviderError> {
        Self::new(
            config.mymemory_url.clone(),
            config.source_lang.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    async fn translate(&self, text: &str, to: &str) -> Result<String, ProviderError> {
        let langpair = format!("{}|{}", self.source_lang, to);
        let params = [("q", text), ("langpair", langpair.as_str())];

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let body: MyMemoryResponse = response.json().await?;
        body.into_text()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "MyMemory".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

#[derive(Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl MyMemoryResponse {
    fn into_text(self) -> Result<String, ProviderError> {
        self.response_data
            .and_then(|data| data.translated_text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ProviderError::bad_response("No translation from MyMemory"))
    }
}
