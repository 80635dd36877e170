use std::sync::Arc;

use anyhow::{Context, Result};
use inviter_api::create_app;
use inviter_core::{AppConfig, DispatchControlService};
use inviter_dispatcher::DispatchController;
use inviter_infrastructure::{init_metrics, ConfigAccountRegistry, InMemoryDirectory, MetricsCollector};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::{net::TcpListener, sync::broadcast};
use tracing::{info, warn};

/// 主应用程序
pub struct Application {
    config: AppConfig,
    controller: Arc<DispatchController>,
    metrics_handle: Option<PrometheusHandle>,
}

impl Application {
    /// 创建新的应用实例
    pub fn new(config: AppConfig) -> Result<Self> {
        // 指标记录器必须在创建指标收集器之前安装
        let metrics_handle = if config.observability.metrics_enabled {
            Some(init_metrics().context("初始化Prometheus指标失败")?)
        } else {
            None
        };
        let metrics = Arc::new(MetricsCollector::new());

        let registry = Arc::new(ConfigAccountRegistry::new(&config.accounts));
        if registry.is_empty() {
            warn!("没有配置任何账号，分发请求将被拒绝");
        } else {
            info!("已加载 {} 个账号", registry.len());
        }

        let directory = Arc::new(InMemoryDirectory::with_config(config.sandbox.clone()));

        let controller = Arc::new(DispatchController::new(
            directory,
            registry,
            metrics,
            config.dispatcher.clone(),
        ));

        Ok(Self {
            config,
            controller,
            metrics_handle,
        })
    }

    /// 分发控制服务
    pub fn controller(&self) -> Arc<dyn DispatchControlService> {
        Arc::clone(&self.controller) as Arc<dyn DispatchControlService>
    }

    /// 运行API服务器，收到关闭信号后退出
    pub async fn run(&self, mut shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        let bind_address = &self.config.api.bind_address;
        info!("启动API服务器: {}", bind_address);

        let app = create_app(
            self.controller(),
            self.metrics_handle.clone(),
            &self.config.api,
            &self.config.observability.metrics_endpoint,
        );

        let listener = TcpListener::bind(bind_address)
            .await
            .with_context(|| format!("绑定地址失败: {}", bind_address))?;

        info!("API服务器启动在 http://{}", bind_address);

        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
                info!("API服务器收到关闭信号");
            })
            .await
            .context("API服务器运行失败")?;

        info!("API服务器已停止");
        Ok(())
    }
}
