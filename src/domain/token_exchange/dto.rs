use serde::{Deserialize, Serialize};

/// Request for POST /api/token-exchange
///
/// Fields are optional at the serde level so that a missing field is reported
/// as a validation error instead of a deserialization rejection.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TokenExchangeRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub redirect_uri: Option<String>,
}

/// A validated authorization code grant, ready to send to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizationCodeGrant {
    pub code: String,
    pub redirect_uri: String,
}
