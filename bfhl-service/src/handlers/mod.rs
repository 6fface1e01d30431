//! HTTP handlers for bfhl-service.

pub mod bfhl;
pub mod health;
pub mod metrics;

pub use bfhl::bfhl;
pub use health::health_check;
pub use self::metrics::metrics;
