pub mod provider_error;

pub use provider_error::{provider_error_detail, ProviderError};
