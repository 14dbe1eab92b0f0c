use crate::domain::roast::{GeneratedText, RoastPrompt, TextGenerationClient};
use crate::domain::shared::ProviderError;
use crate::infrastructure::http::client::transport_error;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Value shipped in sample `.env` files; treated as "no key".
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GEMINI_API_KEY";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
}

impl<'a> From<&'a RoastPrompt> for GenerateContentRequest<'a> {
    fn from(prompt: &'a RoastPrompt) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: &prompt.user_query,
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: &prompt.system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                temperature: prompt.temperature,
            },
        }
    }
}

/// Text of the first part of the first candidate, if any.
pub fn extract_candidate_text(raw: &Value) -> Option<String> {
    raw.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(str::to_owned)
}

/// Gemini `generateContent` client
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    model: String,
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, model: String, http_client: reqwest::Client) -> Self {
        Self {
            api_key,
            base_url,
            model,
            http_client,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl TextGenerationClient for GeminiClient {
    fn is_configured(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key != PLACEHOLDER_API_KEY
    }

    async fn generate(&self, prompt: &RoastPrompt) -> Result<GeneratedText, ProviderError> {
        tracing::info!(
            model = %self.model,
            query_length = prompt.user_query.len(),
            "Calling Gemini generateContent"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::from(prompt))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            tracing::error!(
                model = %self.model,
                status = status.as_u16(),
                body = %body,
                "Gemini API returned an error"
            );
            return Err(ProviderError::from_status(status.as_u16(), &body));
        }

        // A 2xx body that is not JSON has no text to extract
        let raw: Value = serde_json::from_str(&body).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Gemini response is not JSON");
            Value::String(body)
        });

        Ok(GeneratedText {
            text: extract_candidate_text(&raw),
            raw,
        })
    }
}
