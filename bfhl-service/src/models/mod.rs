pub mod request;
pub mod response;

pub use request::{BfhlRequest, Operation, RequestError, MAX_FIBONACCI_TERMS};
pub use response::{BfhlData, SuccessEnvelope};
