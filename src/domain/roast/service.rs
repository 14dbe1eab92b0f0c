use super::client::TextGenerationClient;
use super::dto::{RoastRequest, RoastResponse};
use super::error::RoastError;
use super::prompt::{RoastPrompt, RoastSettings};
use async_trait::async_trait;
use std::sync::Arc;

pub struct RoastService {
    generator: Arc<dyn TextGenerationClient>,
    settings: RoastSettings,
}

impl RoastService {
    pub fn new(generator: Arc<dyn TextGenerationClient>, settings: RoastSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }
}

#[async_trait]
pub trait RoastServiceApi: Send + Sync {
    /// Generate a roast for the caller's preference summary
    ///
    /// This operation:
    /// - Rejects a missing or blank summary
    /// - Fails fast when the provider has no usable API key
    /// - Sends one generation request with the fixed persona and temperature
    /// - Returns the first candidate's text unmodified
    async fn generate_roast(&self, request: RoastRequest) -> Result<RoastResponse, RoastError>;
}

#[async_trait]
impl RoastServiceApi for RoastService {
    async fn generate_roast(&self, request: RoastRequest) -> Result<RoastResponse, RoastError> {
        let summary = request
            .summary_text
            .filter(|s| !s.trim().is_empty())
            .ok_or(RoastError::MissingSummary)?;

        if !self.generator.is_configured() {
            tracing::error!("Roast requested but the Gemini API key is not configured");
            return Err(RoastError::NotConfigured);
        }

        let prompt = RoastPrompt::compose(&self.settings, &summary);

        tracing::info!(
            summary_length = summary.len(),
            temperature = prompt.temperature,
            "Roast generation request"
        );

        let start_time = std::time::Instant::now();
        let generated = self.generator.generate(&prompt).await.map_err(|e| {
            tracing::error!(
                error = %e,
                latency_ms = start_time.elapsed().as_millis(),
                "Roast generation call failed"
            );
            RoastError::from(e)
        })?;

        match generated.text {
            Some(roast_text) if !roast_text.is_empty() => {
                tracing::info!(
                    roast_length = roast_text.len(),
                    latency_ms = start_time.elapsed().as_millis(),
                    "Roast generated"
                );
                Ok(RoastResponse { roast_text })
            }
            _ => {
                tracing::error!(
                    response = %generated.raw,
                    "AI response did not contain candidate text"
                );
                Err(RoastError::Extraction)
            }
        }
    }
}
