use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DispatcherConfig {
    /// 成功邀请之后的等待时间（毫秒）
    pub invite_delay_ms: u64,
    /// 所有账号都在冷却时的重新检查间隔（秒）
    pub all_throttled_backoff_seconds: u64,
    /// 冷却记录数量超过该值时清理已过期记录
    pub cooldown_prune_threshold: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            invite_delay_ms: 30_000,
            all_throttled_backoff_seconds: 5,
            cooldown_prune_threshold: 256,
        }
    }
}

impl DispatcherConfig {
    pub fn invite_delay(&self) -> Duration {
        Duration::from_millis(self.invite_delay_ms)
    }

    pub fn all_throttled_backoff(&self) -> Duration {
        Duration::from_secs(self.all_throttled_backoff_seconds)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.all_throttled_backoff_seconds == 0 {
            return Err(anyhow::anyhow!("冷却重试间隔必须大于0"));
        }

        if self.cooldown_prune_threshold == 0 {
            return Err(anyhow::anyhow!("冷却记录清理阈值必须大于0"));
        }

        Ok(())
    }
}
