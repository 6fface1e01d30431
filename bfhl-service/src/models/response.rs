use serde::Serialize;

/// Success half of the response envelope. The failure half is rendered by
/// `service_core::error::AppError`.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope<T> {
    pub is_success: bool,
    pub official_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> SuccessEnvelope<T> {
    pub fn with_data(official_email: impl Into<String>, data: T) -> Self {
        Self {
            is_success: true,
            official_email: official_email.into(),
            data: Some(data),
        }
    }
}

impl SuccessEnvelope<()> {
    /// Envelope without a `data` field, used by the health probe.
    pub fn empty(official_email: impl Into<String>) -> Self {
        Self {
            is_success: true,
            official_email: official_email.into(),
            data: None,
        }
    }
}

/// Result of one operation, serialized as the bare value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BfhlData {
    Sequence(Vec<u64>),
    Integers(Vec<i64>),
    Integer(i64),
    Answer(String),
}
