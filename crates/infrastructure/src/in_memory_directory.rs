use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};

use inviter_core::{
    DirectoryService, InviteError, InviterError, InviterResult, Participant, ParticipantStream,
    SandboxConfig, WorkerHandle,
};

/// 内存目录服务实现
///
/// 沙箱模式下代替真实的群组协议：记录群组成员、账号加群状态，
/// 按配置模拟封禁、隐私限制和账号限流，适用于演练和测试。
#[derive(Debug)]
pub struct InMemoryDirectory {
    state: Arc<RwLock<DirectoryState>>,
    config: SandboxConfig,
}

#[derive(Debug, Default)]
struct DirectoryState {
    /// 群组 -> 成员
    members: HashMap<String, Vec<Participant>>,
    /// (账号, 群组)
    joined: HashSet<(String, String)>,
    /// 账号 -> 自上次限流以来的成功邀请次数
    invite_counts: HashMap<String, u32>,
    /// 账号 -> 限流解除时间
    flooded_until: HashMap<String, Instant>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::with_config(SandboxConfig::default())
    }

    pub fn with_config(config: SandboxConfig) -> Self {
        info!("Creating in-memory directory with config: {:?}", config);
        Self {
            state: Arc::new(RwLock::new(DirectoryState::default())),
            config,
        }
    }

    /// 预置群组成员
    pub async fn seed_participants(&self, group: &str, participants: Vec<Participant>) {
        let mut state = self.state.write().await;
        state
            .members
            .entry(group.to_string())
            .or_default()
            .extend(participants);
    }

    pub async fn is_member(&self, group: &str, subject: &str) -> bool {
        let state = self.state.read().await;
        state
            .members
            .get(group)
            .map(|members| members.iter().any(|p| p.handle() == subject))
            .unwrap_or(false)
    }

    pub async fn has_joined(&self, account: &str, group: &str) -> bool {
        let state = self.state.read().await;
        state
            .joined
            .contains(&(account.to_string(), group.to_string()))
    }

    fn check_policy(&self, subject: &str) -> Result<(), InviteError> {
        if self.config.banned.iter().any(|s| s == subject) {
            return Err(InviteError::Banned);
        }
        if self.config.privacy_restricted.iter().any(|s| s == subject) {
            return Err(InviteError::PrivacyRestricted);
        }
        Ok(())
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryService for InMemoryDirectory {
    async fn ensure_joined(&self, handle: &WorkerHandle, group: &str) -> InviterResult<()> {
        if group.trim().is_empty() {
            return Err(InviterError::directory("INVITE_HASH_INVALID"));
        }
        let mut state = self.state.write().await;
        if state
            .joined
            .insert((handle.account.clone(), group.to_string()))
        {
            debug!("账号 {} 加入群组 {}", handle.account, group);
        }
        Ok(())
    }

    async fn invite(
        &self,
        handle: &WorkerHandle,
        group: &str,
        subject: &str,
    ) -> Result<(), InviteError> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        let now = Instant::now();

        if let Some(until) = state.flooded_until.get(&handle.account) {
            if *until > now {
                let seconds = (*until - now).as_secs().max(1);
                return Err(InviteError::RateLimited { seconds });
            }
        }

        if !state
            .joined
            .contains(&(handle.account.clone(), group.to_string()))
        {
            return Err(InviteError::other("CHANNEL_PRIVATE"));
        }

        self.check_policy(subject)?;

        let members = state.members.entry(group.to_string()).or_default();
        if members.iter().any(|p| p.handle() == subject) {
            return Err(InviteError::AlreadyMember);
        }

        let count = state.invite_counts.entry(handle.account.clone()).or_insert(0);
        if self.config.flood_after_invites > 0 && *count >= self.config.flood_after_invites {
            *count = 0;
            let seconds = self.config.flood_wait_seconds;
            state.flooded_until.insert(
                handle.account.clone(),
                now + Duration::from_secs(seconds),
            );
            return Err(InviteError::RateLimited { seconds });
        }
        *count += 1;

        state
            .members
            .entry(group.to_string())
            .or_default()
            .push(Participant {
                identifier: subject.to_string(),
                username: Some(subject.to_string()),
                has_photo: false,
                last_seen: Some(chrono::Utc::now().timestamp()),
            });
        debug!("账号 {} 已邀请 {} 进入群组 {}", handle.account, subject, group);
        Ok(())
    }

    async fn list_participants(
        &self,
        handle: &WorkerHandle,
        group: &str,
    ) -> InviterResult<ParticipantStream> {
        let state = self.state.read().await;
        if !state
            .joined
            .contains(&(handle.account.clone(), group.to_string()))
        {
            return Err(InviterError::directory("CHANNEL_PRIVATE"));
        }
        let members = state.members.get(group).cloned().unwrap_or_default();
        Ok(futures::stream::iter(members.into_iter().map(Ok)).boxed())
    }
}
