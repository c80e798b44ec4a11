use crate::config::ErrorStatusPolicy;
use crate::utils::error::PlannerError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// 帶著狀態碼策略的錯誤，回應內容為純文字錯誤訊息
#[derive(Debug)]
pub struct ApiError {
    error: PlannerError,
    policy: ErrorStatusPolicy,
}

impl ApiError {
    pub fn new(error: PlannerError, policy: ErrorStatusPolicy) -> Self {
        Self { error, policy }
    }

    pub fn status(&self) -> StatusCode {
        match self.policy {
            ErrorStatusPolicy::Legacy => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorStatusPolicy::ClientError if self.error.is_client_error() => {
                StatusCode::BAD_REQUEST
            }
            ErrorStatusPolicy::ClientError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if self.error.is_client_error() {
            tracing::warn!("Handler error ({}): {}", status, self.error);
        } else {
            tracing::error!("Handler error ({}): {}", status, self.error);
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n", self.error),
        )
            .into_response()
    }
}
