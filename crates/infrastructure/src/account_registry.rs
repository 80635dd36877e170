use async_trait::async_trait;
use tracing::debug;

use inviter_core::{AccountConfig, AccountRegistry, InviterResult, WorkerHandle, WorkerInfo};

/// 基于配置文件的账号注册表
///
/// 账号在启动时从配置读取，之后只读；每个账号对应一个连接句柄。
#[derive(Debug, Clone, Default)]
pub struct ConfigAccountRegistry {
    workers: Vec<WorkerInfo>,
}

impl ConfigAccountRegistry {
    pub fn new(accounts: &[AccountConfig]) -> Self {
        let workers = accounts
            .iter()
            .map(|account| WorkerInfo::new(account.name.trim(), account.phone.clone()))
            .collect();
        Self { workers }
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

#[async_trait]
impl AccountRegistry for ConfigAccountRegistry {
    async fn list_workers(&self) -> InviterResult<Vec<WorkerInfo>> {
        Ok(self.workers.clone())
    }

    async fn handle(&self, name: &str) -> Option<WorkerHandle> {
        let handle = self
            .workers
            .iter()
            .find(|worker| worker.name == name)
            .map(|worker| WorkerHandle::new(worker.name.clone()));
        if handle.is_none() {
            debug!("账号 {} 未在配置中找到", name);
        }
        handle
    }
}
