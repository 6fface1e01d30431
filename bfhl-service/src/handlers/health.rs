use axum::{extract::State, Json};

use crate::models::SuccessEnvelope;
use crate::startup::AppState;

/// Liveness probe. Depends on nothing but the loaded configuration.
pub async fn health_check(State(state): State<AppState>) -> Json<SuccessEnvelope<()>> {
    Json(SuccessEnvelope::empty(state.config.official_email.clone()))
}
