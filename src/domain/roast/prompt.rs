pub const DEFAULT_SYSTEM_PROMPT: &str = "You are 'Sound Roast Bot,' a sarcastic, cynical, and deeply judgmental AI that critiques user's music taste. You must be humorous, sharp-witted, and focus specifically on the artists, genres, and track titles provided. Your response must be a single, short, contemptuous paragraph (4-6 sentences max). Do not use markdown formatting like bullet points or bold text in the final output.";

pub const USER_QUERY_PREFIX: &str = "Critique this user's music taste based on the following data: ";

/// Generation settings fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct RoastSettings {
    pub system_instruction: String,
    pub temperature: f64,
}

/// A fully composed request for the generation provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RoastPrompt {
    pub system_instruction: String,
    pub user_query: String,
    pub temperature: f64,
}

impl RoastPrompt {
    pub fn compose(settings: &RoastSettings, summary: &str) -> Self {
        Self {
            system_instruction: settings.system_instruction.clone(),
            user_query: format!("{}{}", USER_QUERY_PREFIX, summary),
            temperature: settings.temperature,
        }
    }
}
