//! Metrics collection for bfhl-service.
//!
//! HTTP metrics come from `service_core::middleware::metrics_middleware`;
//! this module adds per-operation counters and renders everything in
//! Prometheus text format.

use crate::models::Operation;
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use service_core::error::AppError;
use std::sync::{Mutex, OnceLock};

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

static INIT: Mutex<()> = Mutex::new(());

/// Install the global Prometheus recorder. Calling it again is a no-op.
pub fn init_metrics() -> Result<(), AppError> {
    let _guard = INIT.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        AppError::InternalError(anyhow::anyhow!(
            "failed to install Prometheus recorder: {}",
            e
        ))
    })?;

    // Installation is serialised by INIT, so the cell is still empty here.
    let _ = METRICS_HANDLE.set(handle);
    Ok(())
}

/// Count one completed operation by name and outcome.
pub fn record_operation(operation: Operation, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!(
        "bfhl_operations_total",
        "operation" => operation.key(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}
