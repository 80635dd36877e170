use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use inviter_core::InviterError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("分发错误: {0}")]
    Inviter(#[from] InviterError),

    #[error("请求参数错误: {0}")]
    BadRequest(String),
}

impl ApiError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Inviter(InviterError::AlreadyRunning) => {
                (StatusCode::CONFLICT, "ALREADY_RUNNING")
            }
            ApiError::Inviter(InviterError::InvalidRequest(_)) | ApiError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST")
            }
            ApiError::Inviter(InviterError::WorkerNotFound { .. }) => {
                (StatusCode::NOT_FOUND, "WORKER_NOT_FOUND")
            }
            ApiError::Inviter(InviterError::NoWorkersAvailable) => {
                (StatusCode::SERVICE_UNAVAILABLE, "NO_WORKERS_AVAILABLE")
            }
            ApiError::Inviter(InviterError::Invite(_)) => (StatusCode::BAD_GATEWAY, "INVITE_FAILED"),
            ApiError::Inviter(InviterError::Directory(_)) => {
                (StatusCode::BAD_GATEWAY, "DIRECTORY_ERROR")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();
        let message = match &self {
            ApiError::Inviter(err) => err.to_string(),
            ApiError::BadRequest(msg) => format!("请求参数错误: {}", msg),
        };

        if status.is_server_error() {
            tracing::error!("请求处理失败: {}", self);
        }

        let body = Json(json!({
            "success": false,
            "data": null,
            "message": message,
            "error": {
                "type": error_type,
                "code": status.as_u16(),
            },
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
