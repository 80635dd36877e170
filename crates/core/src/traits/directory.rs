use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::{
    errors::InviteError,
    models::Participant,
    traits::registry::WorkerHandle,
    InviterResult,
};

/// 一次性的成员枚举流，有限且不可重启
pub type ParticipantStream = BoxStream<'static, InviterResult<Participant>>;

/// 目录服务接口（群组成员关系操作）
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// 确保账号已加入群组（幂等）
    async fn ensure_joined(&self, handle: &WorkerHandle, group: &str) -> InviterResult<()>;

    /// 通过账号邀请单个对象进入群组
    async fn invite(
        &self,
        handle: &WorkerHandle,
        group: &str,
        subject: &str,
    ) -> Result<(), InviteError>;

    /// 惰性枚举群组成员
    async fn list_participants(
        &self,
        handle: &WorkerHandle,
        group: &str,
    ) -> InviterResult<ParticipantStream>;
}
