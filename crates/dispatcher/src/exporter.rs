use std::sync::Arc;

use chrono::Utc;
use futures::{future, TryStreamExt};
use tracing::{info, warn};

use inviter_core::{AccountRegistry, DirectoryService, InviterError, InviterResult, MemberFilter};

/// 群组成员导出
pub struct MemberExporter {
    directory: Arc<dyn DirectoryService>,
    registry: Arc<dyn AccountRegistry>,
}

impl MemberExporter {
    pub fn new(directory: Arc<dyn DirectoryService>, registry: Arc<dyn AccountRegistry>) -> Self {
        Self {
            directory,
            registry,
        }
    }

    /// 通过指定账号枚举群组成员，返回满足过滤条件的标识列表
    pub async fn export(
        &self,
        worker: &str,
        group: &str,
        filter: &MemberFilter,
    ) -> InviterResult<Vec<String>> {
        let group = group.trim();
        if group.is_empty() {
            return Err(InviterError::invalid_request("群组不能为空"));
        }

        let handle = self
            .registry
            .handle(worker)
            .await
            .ok_or_else(|| InviterError::worker_not_found(worker))?;

        if let Err(e) = self.directory.ensure_joined(&handle, group).await {
            warn!("账号 {} 加入群组 {} 失败: {}", worker, group, e);
        }

        let now = Utc::now();
        let members: Vec<String> = self
            .directory
            .list_participants(&handle, group)
            .await?
            .try_filter_map(|participant| {
                let kept = filter
                    .matches(&participant, now)
                    .then(|| participant.handle().to_string());
                future::ready(Ok(kept))
            })
            .try_collect()
            .await?;

        info!(
            "账号 {} 从群组 {} 导出 {} 个成员",
            worker,
            group,
            members.len()
        );
        Ok(members)
    }
}
