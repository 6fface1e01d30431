//! Typed model of a `POST /bfhl` body.
//!
//! The body is a JSON object holding exactly one key. The key selects the
//! [`Operation`]; its value is then decoded strictly into that operation's
//! payload, producing a [`BfhlRequest`].

use serde_json::{Map, Value};
use service_core::error::AppError;
use std::fmt;
use thiserror::Error;

/// Longest Fibonacci prefix whose terms all fit in a `u64` (F(0) through F(93)).
pub const MAX_FIBONACCI_TERMS: usize = 94;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Fibonacci,
    Prime,
    Lcm,
    Hcf,
    Ai,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Fibonacci,
        Operation::Prime,
        Operation::Lcm,
        Operation::Hcf,
        Operation::Ai,
    ];

    /// The request key selecting this operation. Keys are case sensitive.
    pub fn key(self) -> &'static str {
        match self {
            Operation::Fibonacci => "fibonacci",
            Operation::Prime => "prime",
            Operation::Lcm => "lcm",
            Operation::Hcf => "hcf",
            Operation::Ai => "AI",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.key() == key)
    }

    /// What the value under this key must look like.
    pub fn requirement(self) -> &'static str {
        match self {
            Operation::Fibonacci => "fibonacci requires a non-negative integer",
            Operation::Prime => "prime requires an array of integers",
            Operation::Lcm => "lcm requires a non-empty array of integers",
            Operation::Hcf => "hcf requires a non-empty array of integers",
            Operation::Ai => "AI requires a non-empty question string",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn valid_keys() -> String {
    Operation::ALL
        .iter()
        .map(|op| op.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Request must contain exactly one key")]
    KeyCount,

    #[error("Unknown key: {0}. Valid keys are: {keys}", keys = valid_keys())]
    UnknownKey(String),

    #[error("{}", .0.requirement())]
    InvalidPayload(Operation),

    #[error("fibonacci supports at most {} terms", MAX_FIBONACCI_TERMS)]
    FibonacciTooLong,
}

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BfhlRequest {
    Fibonacci(usize),
    Prime(Vec<i64>),
    Lcm(Vec<i64>),
    Hcf(Vec<i64>),
    Ai(String),
}

impl BfhlRequest {
    pub fn operation(&self) -> Operation {
        match self {
            BfhlRequest::Fibonacci(_) => Operation::Fibonacci,
            BfhlRequest::Prime(_) => Operation::Prime,
            BfhlRequest::Lcm(_) => Operation::Lcm,
            BfhlRequest::Hcf(_) => Operation::Hcf,
            BfhlRequest::Ai(_) => Operation::Ai,
        }
    }

    fn from_entry(operation: Operation, value: &Value) -> Result<Self, RequestError> {
        let invalid = || RequestError::InvalidPayload(operation);

        match operation {
            Operation::Fibonacci => {
                let n = term_count(value).ok_or_else(invalid)?;
                let n = usize::try_from(n).map_err(|_| RequestError::FibonacciTooLong)?;
                if n > MAX_FIBONACCI_TERMS {
                    return Err(RequestError::FibonacciTooLong);
                }
                Ok(BfhlRequest::Fibonacci(n))
            }
            Operation::Prime => integer_array(value)
                .map(BfhlRequest::Prime)
                .ok_or_else(invalid),
            Operation::Lcm => integer_array(value)
                .filter(|values| !values.is_empty())
                .map(BfhlRequest::Lcm)
                .ok_or_else(invalid),
            Operation::Hcf => integer_array(value)
                .filter(|values| !values.is_empty())
                .map(BfhlRequest::Hcf)
                .ok_or_else(invalid),
            Operation::Ai => value
                .as_str()
                .map(str::trim)
                .filter(|question| !question.is_empty())
                .map(|question| BfhlRequest::Ai(question.to_string()))
                .ok_or_else(invalid),
        }
    }
}

impl TryFrom<&Map<String, Value>> for BfhlRequest {
    type Error = RequestError;

    fn try_from(body: &Map<String, Value>) -> Result<Self, Self::Error> {
        let mut entries = body.iter();
        let (key, value) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => return Err(RequestError::KeyCount),
        };

        let operation =
            Operation::from_key(key).ok_or_else(|| RequestError::UnknownKey(key.clone()))?;

        Self::from_entry(operation, value)
    }
}

impl TryFrom<Value> for BfhlRequest {
    type Error = RequestError;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        match body {
            Value::Object(map) => BfhlRequest::try_from(&map),
            _ => Err(RequestError::NotAnObject),
        }
    }
}

/// A JSON number with no fractional part that fits in an `i64`.
///
/// Integral floats such as `4.0` are accepted.
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }

    let f = value.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// A non-negative JSON integer of any magnitude.
///
/// Values beyond `u64` saturate; they only have to fail the term bound.
fn term_count(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }

    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= 0.0 {
        Some(f as u64)
    } else {
        None
    }
}

fn integer_array(value: &Value) -> Option<Vec<i64>> {
    value.as_array()?.iter().map(as_integer).collect()
}
