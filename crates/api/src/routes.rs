use axum::{
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use inviter_core::DispatchControlService;

use crate::handlers::{
    dispatch::{
        get_cooldowns, get_outcomes, get_stats, restart_dispatch, retry_single, start_dispatch,
        stop_dispatch,
    },
    health::health_check,
    metrics::render_metrics,
    workers::{export_members, list_workers},
};

/// API应用状态
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<dyn DispatchControlService>,
    pub metrics: Option<PrometheusHandle>,
}

/// 创建API路由
pub fn create_routes(state: AppState, metrics_endpoint: &str) -> Router {
    let mut router = Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 分发控制API
        .route("/api/dispatch/start", post(start_dispatch))
        .route("/api/dispatch/stop", post(stop_dispatch))
        .route("/api/dispatch/restart", post(restart_dispatch))
        .route("/api/dispatch/retry", post(retry_single))
        // 状态查询API
        .route("/api/dispatch/stats", get(get_stats))
        .route("/api/dispatch/outcomes", get(get_outcomes))
        .route("/api/dispatch/cooldowns", get(get_cooldowns))
        // 账号API
        .route("/api/workers", get(list_workers))
        .route("/api/workers/{name}/export", post(export_members));

    if state.metrics.is_some() {
        router = router.route(metrics_endpoint, get(render_metrics));
    }

    router.with_state(state)
}
