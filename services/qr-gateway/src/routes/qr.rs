use axum::{
    extract::rejection::JsonRejection,
    routing::post,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use qr_core::TransactionInput;

// ---------------------------------------------------------------------------
// QR routes
//
// POST /generate-qr  — derive identifier + render symbol, both or nothing
// POST /validate-qr  — stub check: any non-empty identifier is "valid"
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct GenerateResp {
    pub qr_code_base64: String,
    pub hash: String,
}

#[derive(Deserialize)]
pub struct ValidateReq {
    pub qr_hash: String,
}

#[derive(Serialize)]
pub struct ValidateResp {
    pub valid: bool,
    pub timestamp: String,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-qr", post(generate_qr))
        .route("/validate-qr", post(validate_qr))
}

async fn generate_qr(
    payload: Result<Json<TransactionInput>, JsonRejection>,
) -> Result<Json<GenerateResp>, ApiError> {
    let Json(tx) = payload.map_err(|e| ApiError::invalid_input(e.body_text()))?;

    let issued = qr_core::issue(&tx).map_err(|e| {
        metrics::counter!("qr_generate_failures_total").increment(1);
        tracing::error!(user_id = tx.user_id, error = %e, "qr generation failed");
        ApiError::from(e)
    })?;

    metrics::counter!("qr_codes_issued_total").increment(1);
    tracing::info!(user_id = tx.user_id, hash = %issued.identifier, "qr code issued");

    Ok(Json(GenerateResp {
        qr_code_base64: issued.png_base64,
        hash: issued.identifier,
    }))
}

async fn validate_qr(
    payload: Result<Json<ValidateReq>, JsonRejection>,
) -> Result<Json<ValidateResp>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::invalid_input(e.body_text()))?;
    Ok(Json(ValidateResp {
        valid: qr_core::validate(&req.qr_hash),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
