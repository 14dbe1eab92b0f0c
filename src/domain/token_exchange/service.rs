use super::client::OAuthTokenClient;
use super::dto::{AuthorizationCodeGrant, TokenExchangeRequest};
use super::error::TokenExchangeError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub const MISSING_CODE: &str = "Missing authorization code.";
pub const MISSING_REDIRECT_URI: &str = "Missing redirect_uri in request body.";

pub struct TokenExchangeService {
    client: Arc<dyn OAuthTokenClient>,
}

impl TokenExchangeService {
    pub fn new(client: Arc<dyn OAuthTokenClient>) -> Self {
        Self { client }
    }

    /// Turn the raw request into a grant, rejecting missing or blank fields.
    /// `code` is checked before `redirect_uri`.
    pub fn validate(request: TokenExchangeRequest) -> Result<AuthorizationCodeGrant, TokenExchangeError> {
        let code = non_blank(request.code)
            .ok_or_else(|| TokenExchangeError::Invalid(MISSING_CODE.to_string()))?;
        let redirect_uri = non_blank(request.redirect_uri)
            .ok_or_else(|| TokenExchangeError::Invalid(MISSING_REDIRECT_URI.to_string()))?;

        Ok(AuthorizationCodeGrant { code, redirect_uri })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
pub trait TokenExchangeServiceApi: Send + Sync {
    /// Exchange an authorization code for the provider's token payload.
    ///
    /// One attempt per call; nothing is cached.
    async fn exchange(&self, request: TokenExchangeRequest) -> Result<Value, TokenExchangeError>;
}

#[async_trait]
impl TokenExchangeServiceApi for TokenExchangeService {
    async fn exchange(&self, request: TokenExchangeRequest) -> Result<Value, TokenExchangeError> {
        let grant = Self::validate(request)?;

        tracing::info!(
            redirect_uri = %grant.redirect_uri,
            "Attempting token exchange"
        );

        let start_time = std::time::Instant::now();
        match self.client.exchange_code(&grant).await {
            Ok(token_payload) => {
                tracing::info!(
                    redirect_uri = %grant.redirect_uri,
                    latency_ms = start_time.elapsed().as_millis(),
                    "Token exchange succeeded"
                );
                Ok(token_payload)
            }
            Err(e) => {
                tracing::error!(
                    redirect_uri = %grant.redirect_uri,
                    error = %e,
                    latency_ms = start_time.elapsed().as_millis(),
                    "Token exchange failed"
                );
                Err(e.into())
            }
        }
    }
}
