use tokio::time::Instant;
use tracing::debug;

use inviter_core::CooldownEntry;

/// 账号冷却跟踪器
///
/// 记录只追加不修改，是否仍在冷却完全由查询时刻决定，
/// 清理只用于限制内存占用，不影响判断结果。
#[derive(Debug, Default)]
pub struct CooldownTracker {
    entries: Vec<CooldownEntry>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_throttle(&mut self, worker: &str, subject: &str, seconds: u64) -> &CooldownEntry {
        let entry = CooldownEntry::new(worker, subject, seconds);
        debug!(
            "账号 {} 因对象 {} 进入冷却，{} 秒后到期 ({})",
            worker, subject, entry.remaining_seconds, entry.expires
        );
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn is_throttled(&self, worker: &str) -> bool {
        self.is_throttled_at(worker, Instant::now())
    }

    pub fn is_throttled_at(&self, worker: &str, now: Instant) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.worker == worker && entry.is_active_at(now))
    }

    pub fn active_entries(&self) -> Vec<CooldownEntry> {
        let now = Instant::now();
        self.entries
            .iter()
            .filter(|entry| entry.is_active_at(now))
            .cloned()
            .collect()
    }

    pub fn throttled_worker_count(&self, workers: &[String]) -> usize {
        let now = Instant::now();
        workers
            .iter()
            .filter(|worker| self.is_throttled_at(worker, now))
            .count()
    }

    /// 清理已过期记录，返回清理数量
    pub fn prune_expired(&mut self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|entry| entry.is_active_at(now));
        before - self.entries.len()
    }

    pub fn entries(&self) -> &[CooldownEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
