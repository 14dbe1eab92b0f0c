use super::AuthorizationCodeGrant;
use crate::domain::shared::ProviderError;
use async_trait::async_trait;
use serde_json::Value;

/// Client for an OAuth provider's token endpoint.
///
/// Implementations authenticate with the configured client credentials and
/// return the provider's token payload untouched.
#[async_trait]
pub trait OAuthTokenClient: Send + Sync {
    async fn exchange_code(&self, grant: &AuthorizationCodeGrant) -> Result<Value, ProviderError>;
}
