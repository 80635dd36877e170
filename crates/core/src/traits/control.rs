use async_trait::async_trait;

use crate::{
    models::{CooldownEntry, MemberFilter, OutcomeRecord, RunStats, StartRequest, WorkerInfo},
    InviterResult,
};

/// 分发控制服务接口
#[async_trait]
pub trait DispatchControlService: Send + Sync {
    /// 启动一次分发运行，立即返回确认信息
    async fn start(&self, request: StartRequest) -> InviterResult<String>;

    /// 停止当前运行（幂等）
    async fn stop(&self) -> InviterResult<String>;

    /// 停止并清空所有计数、日志和冷却记录
    async fn restart(&self) -> InviterResult<String>;

    /// 随机选一个账号单独重试一个对象，不影响运行状态
    async fn retry_single(&self, subject: &str, group: &str) -> InviterResult<String>;

    /// 当前计数
    async fn stats(&self) -> RunStats;

    /// 按时间顺序的结果日志
    async fn outcomes(&self) -> Vec<OutcomeRecord>;

    /// 仍然有效的冷却记录
    async fn cooldowns(&self) -> Vec<CooldownEntry>;

    /// 已配置的账号列表
    async fn workers(&self) -> InviterResult<Vec<WorkerInfo>>;

    /// 导出群组成员
    async fn export_members(
        &self,
        worker: &str,
        group: &str,
        filter: MemberFilter,
    ) -> InviterResult<Vec<String>>;
}
