use crate::models::MAX_COOLDOWN_SECS;
use serde::{Deserialize, Serialize};

/// 内存目录服务（沙箱）的行为配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SandboxConfig {
    /// 每个账号成功邀请多少次后触发限流，0 表示不限流
    pub flood_after_invites: u32,
    /// 触发限流时返回的等待秒数
    pub flood_wait_seconds: u64,
    /// 被封禁的对象
    pub banned: Vec<String>,
    /// 设置了隐私限制的对象
    pub privacy_restricted: Vec<String>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            flood_after_invites: 0,
            flood_wait_seconds: 60,
            banned: Vec::new(),
            privacy_restricted: Vec::new(),
        }
    }
}

impl SandboxConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.flood_after_invites > 0 && self.flood_wait_seconds == 0 {
            return Err(anyhow::anyhow!("启用限流模拟时等待秒数必须大于0"));
        }
        if self.flood_wait_seconds > MAX_COOLDOWN_SECS {
            return Err(anyhow::anyhow!(
                "限流等待秒数不能超过 {}",
                MAX_COOLDOWN_SECS
            ));
        }
        Ok(())
    }
}
