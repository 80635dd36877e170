//! # Inviter API
//!
//! 邀请分发系统的REST API模块，基于Axum提供分发控制和状态查询接口。
//!
//! ## API 端点
//!
//! ### 分发控制
//! - `POST /api/dispatch/start` - 启动分发 `{group, subjects[], workers[]}`
//! - `POST /api/dispatch/stop` - 停止分发
//! - `POST /api/dispatch/restart` - 停止并清空计数、结果日志和冷却记录
//! - `POST /api/dispatch/retry` - 随机账号单独重试 `{subject, group}`
//!
//! ### 状态查询
//! - `GET /api/dispatch/stats` - 当前计数
//! - `GET /api/dispatch/outcomes` - 结果日志
//! - `GET /api/dispatch/cooldowns` - 冷却记录
//! - `GET /api/workers` - 账号列表
//! - `POST /api/workers/{name}/export` - 导出群组成员
//!
//! ### 监控
//! - `GET /health` - 存活检查
//! - `GET /metrics` - Prometheus指标（启用时）
//!
//! ## 响应格式
//!
//! ```json
//! {
//!   "success": true,
//!   "data": { "success_count": 3, "fail_count": 1 },
//!   "message": null,
//!   "timestamp": "2024-01-01T00:00:00Z"
//! }
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;

use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower::ServiceBuilder;

use inviter_core::{ApiConfig, DispatchControlService};
use middleware::{cors_layer, request_logging, trace_layer};
use routes::{create_routes, AppState};

/// 创建完整的API应用
pub fn create_app(
    controller: Arc<dyn DispatchControlService>,
    metrics: Option<PrometheusHandle>,
    api_config: &ApiConfig,
    metrics_endpoint: &str,
) -> Router {
    let state = AppState {
        controller,
        metrics,
    };

    let router = create_routes(state, metrics_endpoint).layer(
        ServiceBuilder::new()
            .layer(trace_layer())
            .layer(axum::middleware::from_fn(request_logging)),
    );

    if api_config.cors_enabled {
        router.layer(cors_layer(&api_config.cors_origins))
    } else {
        router
    }
}

/// 使用默认配置创建应用，不暴露指标端点
pub fn create_simple_app(controller: Arc<dyn DispatchControlService>) -> Router {
    create_app(controller, None, &ApiConfig::default(), "/metrics")
}
