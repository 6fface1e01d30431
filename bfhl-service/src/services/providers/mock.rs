//! Mock answer provider.

use super::{AnswerProvider, ProviderError};
use async_trait::async_trait;

/// Answers every question with a fixed text, or fails when disabled.
pub struct MockAnswerProvider {
    enabled: bool,
    answer: String,
}

impl MockAnswerProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            answer: "Mock answer".to_string(),
        }
    }

    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            enabled: true,
            answer: answer.into(),
        }
    }
}

#[async_trait]
impl AnswerProvider for MockAnswerProvider {
    async fn answer(&self, _question: &str) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock answer provider not enabled".to_string(),
            ));
        }

        Ok(self.answer.trim().to_string())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
