use async_trait::async_trait;
use serde::Serialize;

use crate::{models::WorkerInfo, InviterResult};

/// 账号的活动连接句柄，由账号注册表持有
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WorkerHandle {
    pub account: String,
}

impl WorkerHandle {
    pub fn new<S: Into<String>>(account: S) -> Self {
        Self {
            account: account.into(),
        }
    }
}

/// 账号注册表接口
#[async_trait]
pub trait AccountRegistry: Send + Sync {
    /// 列出所有可用账号
    async fn list_workers(&self) -> InviterResult<Vec<WorkerInfo>>;

    /// 按名称获取账号连接句柄
    async fn handle(&self, name: &str) -> Option<WorkerHandle>;
}
