use std::sync::Arc;

use inviter_core::DispatchControlService;
use tokio::sync::broadcast;
use tracing::{info, warn};

/// 进程关闭协调器
///
/// 先停止正在进行的分发，再通知API服务器等订阅者退出。
pub struct ShutdownCoordinator {
    controller: Arc<dyn DispatchControlService>,
    shutdown_tx: broadcast::Sender<()>,
}

impl ShutdownCoordinator {
    pub fn new(controller: Arc<dyn DispatchControlService>) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            controller,
            shutdown_tx,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// 停止当前分发并广播关闭信号，返回收到信号的订阅者数量
    pub async fn shutdown(&self) -> usize {
        match self.controller.stop().await {
            Ok(message) => info!("关闭前停止分发: {}", message),
            Err(e) => warn!("停止分发失败: {}", e),
        }

        let receivers = self.shutdown_tx.send(()).unwrap_or(0);
        info!("关闭信号已发送给 {} 个订阅者", receivers);
        receivers
    }
}
