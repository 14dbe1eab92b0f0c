use crate::domain::shared::ProviderError;
use crate::error::AppError;

pub const MISSING_SUMMARY: &str = "Missing summaryText for the roast.";
pub const NOT_CONFIGURED: &str = "Gemini API key is not configured on the server.";
pub const GENERATION_FAILED: &str = "Failed to communicate with the Gemini API.";
pub const EXTRACTION_FAILED: &str =
    "Failed to extract text from AI response. Check API usage limits or safety filters.";

#[derive(Debug, thiserror::Error)]
pub enum RoastError {
    #[error("{}", MISSING_SUMMARY)]
    MissingSummary,
    #[error("{}", NOT_CONFIGURED)]
    NotConfigured,
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("{}", EXTRACTION_FAILED)]
    Extraction,
}

impl From<RoastError> for AppError {
    fn from(err: RoastError) -> Self {
        match err {
            RoastError::MissingSummary => AppError::Validation(MISSING_SUMMARY.to_string()),
            RoastError::NotConfigured => AppError::Configuration(NOT_CONFIGURED.to_string()),
            RoastError::Provider(e) => AppError::Upstream {
                message: GENERATION_FAILED.to_string(),
                details: e.details(),
            },
            RoastError::Extraction => AppError::Extraction(EXTRACTION_FAILED.to_string()),
        }
    }
}
