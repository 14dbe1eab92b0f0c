pub mod client;
pub mod dto;
pub mod error;
pub mod service;

pub use client::OAuthTokenClient;
pub use dto::{AuthorizationCodeGrant, TokenExchangeRequest};
pub use error::TokenExchangeError;
pub use service::{TokenExchangeService, TokenExchangeServiceApi};
