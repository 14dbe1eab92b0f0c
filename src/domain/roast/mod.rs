pub mod client;
pub mod dto;
pub mod error;
pub mod prompt;
pub mod service;

pub use client::{GeneratedText, TextGenerationClient};
pub use dto::{RoastRequest, RoastResponse};
pub use error::RoastError;
pub use prompt::{RoastPrompt, RoastSettings, DEFAULT_SYSTEM_PROMPT, USER_QUERY_PREFIX};
pub use service::{RoastService, RoastServiceApi};
