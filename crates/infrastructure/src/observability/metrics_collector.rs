//! Metrics collector for the invite dispatcher
//!
//! Counters and gauges are registered once through the `metrics` facade; without an
//! installed recorder every call is a no-op.

use metrics::{counter, gauge, Counter, Gauge};
use tracing::debug;

/// Metrics collector for the invite dispatcher
pub struct MetricsCollector {
    invites_total: Counter,
    invite_failures_total: Counter,
    invites_skipped_total: Counter,
    cooldowns_recorded_total: Counter,
    runs_started_total: Counter,
    queue_remaining: Gauge,
    throttled_workers: Gauge,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            invites_total: counter!("inviter_invites_total"),
            invite_failures_total: counter!("inviter_invite_failures_total"),
            invites_skipped_total: counter!("inviter_invites_skipped_total"),
            cooldowns_recorded_total: counter!("inviter_cooldowns_recorded_total"),
            runs_started_total: counter!("inviter_runs_started_total"),
            queue_remaining: gauge!("inviter_queue_remaining"),
            throttled_workers: gauge!("inviter_throttled_workers"),
        }
    }

    /// Record a successful invite
    pub fn record_invite_success(&self) {
        self.invites_total.increment(1);
    }

    /// Record a failed invite (rate limited or unclassified)
    pub fn record_invite_failure(&self, error_type: &str) {
        self.invite_failures_total.increment(1);
        debug!(error_type = error_type, "Invite failure recorded");
    }

    /// Record an invite skipped by membership policy
    pub fn record_invite_skipped(&self) {
        self.invites_skipped_total.increment(1);
    }

    /// Record a new cooldown window for a worker
    pub fn record_cooldown(&self, worker: &str, seconds: u64) {
        self.cooldowns_recorded_total.increment(1);
        debug!(worker = worker, seconds = seconds, "Cooldown recorded");
    }

    pub fn record_run_started(&self) {
        self.runs_started_total.increment(1);
    }

    pub fn update_queue_remaining(&self, remaining: usize) {
        self.queue_remaining.set(remaining as f64);
    }

    pub fn update_throttled_workers(&self, count: usize) {
        self.throttled_workers.set(count as f64);
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}
