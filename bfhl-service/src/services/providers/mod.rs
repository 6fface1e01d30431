//! Answer provider abstractions and implementations.
//!
//! The `AI` operation forwards a question to an [`AnswerProvider`]. Gemini is
//! the production backend; the mock backs tests and keyless development runs.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use mock::MockAnswerProvider;

/// Error type for provider operations.
///
/// Messages may contain upstream detail and are meant for logs only.
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

    #[error("Unexpected response shape: {0}")]
    InvalidResponse(String),
}

/// Instruction prepended to every question so answers stay terse.
pub const TERSE_ANSWER_INSTRUCTION: &str =
    "Answer the following question with only a single word or very short phrase (maximum 2-3 words)";

pub fn terse_prompt(question: &str) -> String {
    format!("{}: {}", TERSE_ANSWER_INSTRUCTION, question)
}

/// Answers a natural-language question with a short text.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Issue exactly one upstream request and return the trimmed answer.
    async fn answer(&self, question: &str) -> Result<String, ProviderError>;

    /// Provider name for logs and metrics.
    fn name(&self) -> &'static str;
}
