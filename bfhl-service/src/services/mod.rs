pub mod dispatcher;
pub mod math;
pub mod metrics;
pub mod providers;

pub use dispatcher::{DispatchError, Dispatcher, AI_FAILURE_MESSAGE};
pub use self::metrics::{get_metrics, init_metrics};
pub use providers::{AnswerProvider, GeminiConfig, GeminiProvider, MockAnswerProvider};
