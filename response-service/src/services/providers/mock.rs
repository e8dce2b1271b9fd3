//! Mock provider implementation for testing and local development.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;

/// Mock text provider returning canned text.
pub struct MockTextProvider {
    enabled: bool,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        // Simulate some processing
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Ok(format!("Mock response for: {}", prompt))
    }
}
