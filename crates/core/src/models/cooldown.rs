use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::Instant;

/// 账号冷却记录
///
/// 由限流结果创建，之后不再修改；`now >= deadline` 后自然失效。
#[derive(Debug, Clone, Serialize)]
pub struct CooldownEntry {
    pub subject: String,
    pub worker: String,
    /// 可读的到期时间
    pub expires: String,
    pub expires_at: DateTime<Utc>,
    /// 创建时的剩余秒数
    pub remaining_seconds: u64,
    #[serde(skip)]
    deadline: Instant,
}

/// 限流等待时长上限（7天），目录服务返回更长的等待按上限记录
pub const MAX_COOLDOWN_SECS: u64 = 7 * 24 * 60 * 60;

impl CooldownEntry {
    /// 创建冷却记录，等待时长限制在 `1..=MAX_COOLDOWN_SECS` 秒内
    pub fn new(worker: &str, subject: &str, seconds: u64) -> Self {
        let seconds = seconds.clamp(1, MAX_COOLDOWN_SECS);
        let wait = Duration::from_secs(seconds);

        let now = Utc::now();
        let expires_at = chrono::Duration::try_seconds(seconds as i64)
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let started = Instant::now();
        let deadline = started.checked_add(wait).unwrap_or(started);

        Self {
            subject: subject.to_string(),
            worker: worker.to_string(),
            expires: expires_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            expires_at,
            remaining_seconds: seconds,
            deadline,
        }
    }

    pub fn is_active_at(&self, now: Instant) -> bool {
        self.deadline > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_expires_after_duration() {
        let entry = CooldownEntry::new("w1", "alice", 60);
        assert!(entry.is_active_at(Instant::now()));
        assert_eq!(entry.remaining_seconds, 60);

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(entry.is_active_at(Instant::now()));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(!entry.is_active_at(Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_wait_is_clamped() {
        let entry = CooldownEntry::new("w1", "alice", 0);
        assert_eq!(entry.remaining_seconds, 1);
        assert!(entry.is_active_at(Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_oversized_wait_is_capped() {
        for seconds in [MAX_COOLDOWN_SECS + 1, i64::MAX as u64, u64::MAX / 2, u64::MAX] {
            let entry = CooldownEntry::new("w1", "alice", seconds);
            assert_eq!(entry.remaining_seconds, MAX_COOLDOWN_SECS);
            assert!(entry.is_active_at(Instant::now()));
            assert!(entry.expires_at > Utc::now());
        }

        let entry = CooldownEntry::new("w1", "alice", u64::MAX);
        tokio::time::advance(Duration::from_secs(MAX_COOLDOWN_SECS)).await;
        assert!(!entry.is_active_at(Instant::now()));
    }

    #[tokio::test]
    async fn test_serialization_skips_deadline() {
        let entry = CooldownEntry::new("w1", "alice", 30);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["worker"], "w1");
        assert_eq!(json["remaining_seconds"], 30);
        assert!(json.get("deadline").is_none());
        assert!(json["expires"].as_str().unwrap().ends_with("UTC"));
    }
}
