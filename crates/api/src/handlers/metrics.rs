use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::routes::AppState;

/// Prometheus文本格式的指标
pub async fn render_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
