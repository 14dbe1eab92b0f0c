use serde_json::Value;

/// Failure talking to an external provider (OAuth or AI).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request to provider failed: {0}")]
    Transport(String),

    #[error("provider returned HTTP {status}: {details}")]
    Status { status: u16, details: String },

    #[error("provider response could not be decoded: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Best-effort description to surface to callers as `details`.
    pub fn details(&self) -> String {
        match self {
            Self::Transport(msg) | Self::Decode(msg) => msg.clone(),
            Self::Status { details, .. } => details.clone(),
        }
    }

    /// Build a `Status` error from a non-2xx response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let details = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| provider_error_detail(&json))
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    trimmed.to_string()
                }
            });

        Self::Status { status, details }
    }
}

/// Pull a human readable message out of a provider error body.
///
/// OAuth servers answer `{"error": "invalid_grant", "error_description": "..."}`
/// while Google APIs answer `{"error": {"code": 400, "message": "...", "status": "..."}}`.
pub fn provider_error_detail(body: &Value) -> Option<String> {
    if let Some(description) = body.get("error_description").and_then(Value::as_str) {
        return Some(description.to_string());
    }

    match body.get("error") {
        Some(Value::String(error)) => Some(error.clone()),
        Some(Value::Object(error)) => error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
