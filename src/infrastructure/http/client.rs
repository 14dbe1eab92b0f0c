use crate::domain::shared::ProviderError;
use std::time::Duration;

/// Build the outbound HTTP client shared by all provider clients.
///
/// Every request is bounded by `timeout`; an elapsed timeout surfaces as a
/// transport failure.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("sound-roast-backend/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Convert a reqwest failure into a provider error.
///
/// The URL is dropped from the message since it may carry an API key in its query.
pub fn transport_error(err: reqwest::Error) -> ProviderError {
    let err = err.without_url();
    if err.is_timeout() {
        ProviderError::Transport(format!("request timed out: {}", err))
    } else {
        ProviderError::Transport(err.to_string())
    }
}
