use thiserror::Error;

/// 目录服务邀请调用的失败分类
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InviteError {
    #[error("FLOOD_WAIT_{seconds}")]
    RateLimited { seconds: u64 },

    #[error("USER_ALREADY_PARTICIPANT")]
    AlreadyMember,

    #[error("USER_BANNED_IN_CHANNEL")]
    Banned,

    #[error("USER_PRIVACY_RESTRICTED")]
    PrivacyRestricted,

    #[error("{0}")]
    Other(String),
}

impl InviteError {
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// 对当前对象不可重试、应当跳过的失败
    pub fn is_policy_skip(&self) -> bool {
        matches!(
            self,
            InviteError::AlreadyMember | InviteError::Banned | InviteError::PrivacyRestricted
        )
    }
}

/// 邀请系统错误类型定义
#[derive(Debug, Error)]
pub enum InviterError {
    #[error("已有正在运行的分发任务")]
    AlreadyRunning,

    #[error("无效的请求: {0}")]
    InvalidRequest(String),

    #[error("账号未找到: {name}")]
    WorkerNotFound { name: String },

    #[error("没有可用的账号")]
    NoWorkersAvailable,

    #[error("邀请失败: {0}")]
    Invite(#[from] InviteError),

    #[error("目录服务错误: {0}")]
    Directory(String),
}

impl InviterError {
    pub fn invalid_request<S: Into<String>>(msg: S) -> Self {
        Self::InvalidRequest(msg.into())
    }
    pub fn worker_not_found<S: Into<String>>(name: S) -> Self {
        Self::WorkerNotFound { name: name.into() }
    }
    pub fn directory<S: Into<String>>(msg: S) -> Self {
        Self::Directory(msg.into())
    }
}
