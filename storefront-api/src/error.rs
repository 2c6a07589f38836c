use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Handler-boundary error. Two kinds only: the requested record does not
/// exist, or an external dependency (store or gateway) failed. Dependency
/// failures keep their source for server-side logging but the caller only
/// ever sees a generic message.
#[derive(Debug)]
pub enum AppError {
    NotFound(&'static str),
    Infrastructure {
        message: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl AppError {
    pub fn infrastructure(
        message: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Infrastructure {
            message,
            source: source.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Infrastructure { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
