use super::error::ApiError;
use super::AppState;
use crate::domain::model::{InvestmentRequest, InvestmentResponse};
use crate::domain::ports::Calculator;
use axum::{body::Bytes, extract::State, Json};

pub async fn welcome() -> &'static str {
    "Welcome!"
}

/// POST /api/calculate
///
/// 直接從原始位元組解碼，不檢查 Content-Type。
pub async fn calculate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<InvestmentResponse>, ApiError> {
    let request: InvestmentRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Error decoding request: {}", e);
        state.reject(e.into())
    })?;

    let response = state
        .calculator
        .calculate(&request)
        .map_err(|e| state.reject(e))?;

    Ok(Json(response))
}
