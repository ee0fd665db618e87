use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("mail dispatch error: {0}")]
    Mail(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The real cause goes to the logs; the caller only ever sees the
        // fixed generic message.
        let (status, message) = match &self {
            AppError::Mail(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Lỗi xử lý yêu cầu. Vui lòng thử lại.",
            ),
        };

        let body = serde_json::json!({ "success": false, "message": message });
        (status, axum::Json(body)).into_response()
    }
}
