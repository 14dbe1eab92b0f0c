use super::RoastPrompt;
use crate::domain::shared::ProviderError;
use async_trait::async_trait;
use serde_json::Value;

/// What a generation provider answered.
///
/// `text` is `None` when the response carried no usable candidate (safety
/// block, quota, unexpected shape); `raw` keeps the body for diagnostics.
#[derive(Debug, Clone)]
pub struct GeneratedText {
    pub text: Option<String>,
    pub raw: Value,
}

#[async_trait]
pub trait TextGenerationClient: Send + Sync {
    /// Whether the client holds usable credentials. Checked before any call.
    fn is_configured(&self) -> bool;

    async fn generate(&self, prompt: &RoastPrompt) -> Result<GeneratedText, ProviderError>;
}
