use serde::{Deserialize, Serialize};

/// Request for POST /api/roast
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RoastRequest {
    /// Caller-built description of the listener's preferences,
    /// e.g. `"Top Artists: X, Y. Top Genres: Z."`.
    #[serde(rename = "summaryText", default)]
    pub summary_text: Option<String>,
}

/// Response for POST /api/roast
#[derive(Debug, Serialize, Deserialize)]
pub struct RoastResponse {
    #[serde(rename = "roastText")]
    pub roast_text: String,
}
