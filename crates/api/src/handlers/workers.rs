use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use inviter_core::{LastSeenWindow, MemberFilter};

use crate::{error::ApiResult, response::success, routes::AppState};

/// 成员导出请求
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub group: String,
    #[serde(default)]
    pub has_username: bool,
    #[serde(default)]
    pub has_photo: bool,
    #[serde(default)]
    pub last_seen: LastSeenWindow,
}

impl ExportRequest {
    fn filter(&self) -> MemberFilter {
        MemberFilter {
            has_username: self.has_username,
            has_photo: self.has_photo,
            last_seen: self.last_seen,
        }
    }
}

/// 获取账号列表
pub async fn list_workers(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let workers = state.controller.workers().await?;
    Ok(success(workers))
}

/// 通过指定账号导出群组成员
pub async fn export_members(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<ExportRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let members = state
        .controller
        .export_members(&name, &request.group, request.filter())
        .await?;
    Ok(success(members))
}
