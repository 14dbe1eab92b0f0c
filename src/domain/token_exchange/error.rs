use crate::domain::shared::ProviderError;
use crate::error::AppError;

pub const TOKEN_EXCHANGE_FAILED: &str = "Failed to exchange authorization code for access token.";

#[derive(Debug, thiserror::Error)]
pub enum TokenExchangeError {
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<TokenExchangeError> for AppError {
    fn from(err: TokenExchangeError) -> Self {
        match err {
            TokenExchangeError::Invalid(msg) => AppError::Validation(msg),
            TokenExchangeError::Provider(e) => AppError::Upstream {
                message: TOKEN_EXCHANGE_FAILED.to_string(),
                details: e.details(),
            },
        }
    }
}
