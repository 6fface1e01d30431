use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

use crate::models::{BfhlData, BfhlRequest, SuccessEnvelope};
use crate::startup::AppState;

/// `POST /bfhl`: decode the single-key body, run the selected operation and
/// wrap its result in the success envelope.
#[tracing::instrument(skip(state, payload))]
pub async fn bfhl(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SuccessEnvelope<BfhlData>>, AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let request = BfhlRequest::try_from(body)?;
    tracing::debug!(operation = %request.operation(), "Dispatching request");

    let data = state.dispatcher.dispatch(request).await?;

    Ok(Json(SuccessEnvelope::with_data(
        state.config.official_email.clone(),
        data,
    )))
}
