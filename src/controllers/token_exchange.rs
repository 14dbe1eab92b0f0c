use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use super::json_body;
use crate::{
    domain::token_exchange::{TokenExchangeRequest, TokenExchangeService, TokenExchangeServiceApi},
    error::AppResult,
};

pub struct TokenExchangeController {
    service: Arc<TokenExchangeService>,
}

impl TokenExchangeController {
    pub fn new(service: Arc<TokenExchangeService>) -> Self {
        Self { service }
    }

    /// POST /api/token-exchange - Exchange an authorization code for tokens
    ///
    /// Body: `{ "code": "...", "redirect_uri": "..." }`. The provider's token
    /// JSON is returned as-is.
    pub async fn exchange(
        State(controller): State<Arc<TokenExchangeController>>,
        payload: Result<Json<TokenExchangeRequest>, JsonRejection>,
    ) -> AppResult<Json<Value>> {
        let request = json_body(payload)?;

        let token_payload = controller.service.exchange(request).await?;

        Ok(Json(token_payload))
    }
}
