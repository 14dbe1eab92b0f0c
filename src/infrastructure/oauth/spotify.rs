use crate::domain::shared::ProviderError;
use crate::domain::token_exchange::{AuthorizationCodeGrant, OAuthTokenClient};
use crate::infrastructure::http::client::transport_error;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;

pub struct SpotifyOAuthClient {
    client_id: String,
    client_secret: String,
    token_url: String,
    http_client: reqwest::Client,
}

impl SpotifyOAuthClient {
    pub fn new(
        client_id: String,
        client_secret: String,
        token_url: String,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            token_url,
            http_client,
        }
    }

    /// `Basic base64(client_id:client_secret)`, standard alphabet with padding
    pub fn basic_auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

#[async_trait]
impl OAuthTokenClient for SpotifyOAuthClient {
    /// Exchange authorization code for the token bundle
    async fn exchange_code(&self, grant: &AuthorizationCodeGrant) -> Result<Value, ProviderError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", grant.code.as_str()),
            ("redirect_uri", grant.redirect_uri.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .header(AUTHORIZATION, self.basic_auth_header())
            .header(ACCEPT, "application/json")
            .form(&params)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "Spotify token endpoint returned an error"
            );
            return Err(ProviderError::from_status(status.as_u16(), &body));
        }

        serde_json::from_str::<Value>(&body)
            .map_err(|e| ProviderError::Decode(format!("Spotify token response is not JSON: {}", e)))
    }
}
