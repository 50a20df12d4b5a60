use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::wizard::ValidationReason;
use serde_json::json;
use thiserror::Error;

/// Ошибка сервисного слоя
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Присланный результат мастера не прошёл проверку
    #[error(transparent)]
    Validation(#[from] ValidationReason),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Validation(reason) => {
                tracing::warn!("Rejected submission: {}", reason);
            }
            Self::Internal(e) => {
                tracing::error!("Service failure: {:#}", e);
            }
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
