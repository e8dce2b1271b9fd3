//! Text provider abstraction and implementations.
//!
//! The gateway exposes a single `generate` call; every failure mode behind
//! it is terminal for the request and surfaces to the caller as an opaque
//! generation error.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation providers (e.g., Gemini).
///
/// Implementations return the provider's text verbatim and never retry;
/// identical prompts may yield different text.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
