use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use inviter_core::StartRequest;

use crate::{
    error::{ApiError, ApiResult},
    response::{accepted, message, success},
    routes::AppState,
};

/// 单独重试请求
#[derive(Debug, Deserialize)]
pub struct RetryRequest {
    pub subject: String,
    pub group: String,
}

/// 启动分发
pub async fn start_dispatch(
    State(state): State<AppState>,
    Json(request): Json<StartRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    info!(
        "收到启动请求: 群组 {}, {} 个对象, {} 个账号",
        request.group,
        request.subjects.len(),
        request.workers.len()
    );
    let ack = state.controller.start(request).await?;
    Ok(accepted(ack))
}

/// 停止分发
pub async fn stop_dispatch(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let ack = state.controller.stop().await?;
    Ok(message(ack))
}

/// 停止并清空状态
pub async fn restart_dispatch(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let ack = state.controller.restart().await?;
    Ok(message(ack))
}

/// 随机账号单独重试
pub async fn retry_single(
    State(state): State<AppState>,
    Json(request): Json<RetryRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    if request.subject.trim().is_empty() {
        return Err(ApiError::BadRequest("subject 不能为空".to_string()));
    }
    let result = state
        .controller
        .retry_single(&request.subject, &request.group)
        .await?;
    Ok(message(result))
}

pub async fn get_stats(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    Ok(success(state.controller.stats().await))
}

pub async fn get_outcomes(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    Ok(success(state.controller.outcomes().await))
}

pub async fn get_cooldowns(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    Ok(success(state.controller.cooldowns().await))
}
