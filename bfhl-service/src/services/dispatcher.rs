use crate::models::{BfhlData, BfhlRequest, Operation};
use crate::services::math;
use crate::services::metrics::record_operation;
use crate::services::providers::AnswerProvider;
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;

/// Caller-facing message for every answer provider failure.
pub const AI_FAILURE_MESSAGE: &str = "Failed to get AI response";

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{0} result exceeds the supported integer range")]
    Overflow(Operation),

    #[error("{}", AI_FAILURE_MESSAGE)]
    AiFailure,
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Overflow(_) => AppError::BadRequest(err.to_string()),
            DispatchError::AiFailure => AppError::UpstreamFailure(err.to_string()),
        }
    }
}

/// Routes a decoded request to its kernel or to the answer provider.
#[derive(Clone)]
pub struct Dispatcher {
    provider: Arc<dyn AnswerProvider>,
}

impl Dispatcher {
    pub fn new(provider: Arc<dyn AnswerProvider>) -> Self {
        Self { provider }
    }

    pub async fn dispatch(&self, request: BfhlRequest) -> Result<BfhlData, DispatchError> {
        let operation = request.operation();
        let result = self.execute(request).await;
        record_operation(operation, result.is_ok());
        result
    }

    async fn execute(&self, request: BfhlRequest) -> Result<BfhlData, DispatchError> {
        match request {
            BfhlRequest::Fibonacci(n) => Ok(BfhlData::Sequence(math::fibonacci(n))),
            BfhlRequest::Prime(values) => Ok(BfhlData::Integers(math::filter_primes(&values))),
            BfhlRequest::Hcf(values) => Ok(BfhlData::Integer(math::hcf(&values))),
            BfhlRequest::Lcm(values) => math::lcm(&values)
                .map(BfhlData::Integer)
                .ok_or(DispatchError::Overflow(Operation::Lcm)),
            BfhlRequest::Ai(question) => match self.provider.answer(&question).await {
                Ok(answer) => Ok(BfhlData::Answer(answer)),
                Err(e) => {
                    tracing::error!(
                        provider = self.provider.name(),
                        error = %e,
                        "AI provider request failed"
                    );
                    Err(DispatchError::AiFailure)
                }
            },
        }
    }
}
