use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, RwLock};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use inviter_core::{
    AccountRegistry, DirectoryService, DispatcherConfig, Job, OutcomeRecord, RunPhase,
};
use inviter_infrastructure::{MetricsCollector, StructuredLogger};

use crate::classification::InviteClassification;
use crate::rotation::RoundRobinRotation;
use crate::run_state::RunState;

const ACCOUNT_NOT_CONNECTED: &str = "account not connected";

/// 单个周期结束后循环的下一步动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Continue,
    Wait(Duration),
    Halt,
}

/// 分发循环
///
/// 每个周期最多处理一个任务，严格按照队列顺序执行。
/// 循环只在启动它的运行代号仍然有效时工作。
pub struct DispatchLoop {
    generation: u64,
    group: String,
    jobs: Vec<Job>,
    workers: Vec<String>,
    cursor: usize,
    rotation: RoundRobinRotation,
    state: Arc<RwLock<RunState>>,
    wakeup: Arc<Notify>,
    directory: Arc<dyn DirectoryService>,
    registry: Arc<dyn AccountRegistry>,
    metrics: Arc<MetricsCollector>,
    config: DispatcherConfig,
}

impl DispatchLoop {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        generation: u64,
        group: String,
        jobs: Vec<Job>,
        workers: Vec<String>,
        state: Arc<RwLock<RunState>>,
        wakeup: Arc<Notify>,
        directory: Arc<dyn DirectoryService>,
        registry: Arc<dyn AccountRegistry>,
        metrics: Arc<MetricsCollector>,
        config: DispatcherConfig,
    ) -> Self {
        Self {
            generation,
            group,
            jobs,
            workers,
            cursor: 0,
            rotation: RoundRobinRotation::new(),
            state,
            wakeup,
            directory,
            registry,
            metrics,
            config,
        }
    }

    pub async fn run(mut self) {
        info!(
            "分发循环启动: 代号 {}, 群组 {}, {} 个任务",
            self.generation,
            self.group,
            self.jobs.len()
        );

        let reason = loop {
            match self.run_cycle().await {
                CycleOutcome::Continue => {}
                CycleOutcome::Wait(duration) => self.wait(duration).await,
                CycleOutcome::Halt => {
                    break if self.cursor >= self.jobs.len() {
                        "queue_exhausted"
                    } else {
                        "stopped"
                    };
                }
            }
        };

        let stats = self.state.read().await.stats();
        StructuredLogger::log_run_finished(
            self.generation,
            stats.success_count,
            stats.fail_count,
            reason,
        );
    }

    /// 执行一个周期
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let worker = {
            let mut state = self.state.write().await;
            if !state.is_current(self.generation) {
                debug!("运行代号 {} 已失效，循环退出", self.generation);
                return CycleOutcome::Halt;
            }

            if self.cursor >= self.jobs.len() {
                state.finish(self.generation);
                return CycleOutcome::Halt;
            }

            if state.cooldowns.len() > self.config.cooldown_prune_threshold {
                let pruned = state.cooldowns.prune_expired();
                debug!("清理了 {} 条过期冷却记录", pruned);
            }

            let now = Instant::now();
            let cooldowns = &state.cooldowns;
            let selected = self
                .rotation
                .next_eligible(&self.workers, |w| cooldowns.is_throttled_at(w, now));

            match selected {
                Some(worker) => {
                    state.set_phase(self.generation, RunPhase::Running);
                    worker
                }
                None => {
                    state.set_phase(self.generation, RunPhase::WaitingAllThrottled);
                    self.metrics.update_throttled_workers(self.workers.len());
                    info!(
                        "所有账号都在冷却中，{} 秒后重试",
                        self.config.all_throttled_backoff_seconds
                    );
                    return CycleOutcome::Wait(self.config.all_throttled_backoff());
                }
            }
        };

        let subject = self.jobs[self.cursor].subject.clone();
        StructuredLogger::log_worker_selected(&subject, &worker, self.rotation.pointer());

        let Some(handle) = self.registry.handle(&worker).await else {
            warn!("账号 {} 没有可用连接", worker);
            self.record(OutcomeRecord::fail(
                &subject,
                &worker,
                ACCOUNT_NOT_CONNECTED.to_string(),
            ))
            .await;
            self.metrics.record_invite_failure("not_connected");
            self.advance();
            return CycleOutcome::Continue;
        };

        if let Err(e) = self.directory.ensure_joined(&handle, &self.group).await {
            StructuredLogger::log_join_failed(&worker, &self.group, &e.to_string());
        }

        let result = self.directory.invite(&handle, &self.group, &subject).await;
        let classification = InviteClassification::classify(result);
        self.apply(&subject, &worker, &classification).await;
        self.advance();

        if classification.needs_delay() && !self.config.invite_delay().is_zero() {
            CycleOutcome::Wait(self.config.invite_delay())
        } else {
            CycleOutcome::Continue
        }
    }

    async fn apply(&self, subject: &str, worker: &str, classification: &InviteClassification) {
        let mut state = self.state.write().await;
        if state.generation() != self.generation {
            debug!("运行已重置，丢弃对象 {} 的结果", subject);
            return;
        }

        match classification {
            InviteClassification::Success => {
                StructuredLogger::log_invite_succeeded(subject, worker, &self.group);
                state.record_outcome(self.generation, OutcomeRecord::success(subject, worker));
                self.metrics.record_invite_success();
            }
            InviteClassification::RateLimited { seconds } => {
                let detail = classification.detail().unwrap_or_default();
                StructuredLogger::log_invite_failed(subject, worker, &detail, false);
                let entry = state.cooldowns.record_throttle(worker, subject, *seconds);
                StructuredLogger::log_cooldown_recorded(worker, subject, entry.remaining_seconds);
                self.metrics.record_cooldown(worker, entry.remaining_seconds);
                state.record_outcome(self.generation, OutcomeRecord::fail(subject, worker, detail));
                self.metrics.record_invite_failure("rate_limited");
            }
            InviteClassification::PolicySkip(_) => {
                let detail = classification.detail().unwrap_or_default();
                StructuredLogger::log_invite_failed(subject, worker, &detail, true);
                state.record_outcome(
                    self.generation,
                    OutcomeRecord::skipped(subject, worker, detail),
                );
                self.metrics.record_invite_skipped();
            }
            InviteClassification::Failed(_) => {
                let detail = classification.detail().unwrap_or_default();
                StructuredLogger::log_invite_failed(subject, worker, &detail, false);
                state.record_outcome(self.generation, OutcomeRecord::fail(subject, worker, detail));
                self.metrics.record_invite_failure("other");
            }
        }

        self.metrics
            .update_throttled_workers(state.cooldowns.throttled_worker_count(&self.workers));
    }

    async fn record(&self, record: OutcomeRecord) {
        self.state
            .write()
            .await
            .record_outcome(self.generation, record);
    }

    fn advance(&mut self) {
        self.cursor += 1;
        self.metrics
            .update_queue_remaining(self.jobs.len().saturating_sub(self.cursor));
    }

    /// 可被停止/重启打断的等待
    async fn wait(&self, duration: Duration) {
        tokio::select! {
            _ = tokio::time::sleep(duration) => {}
            _ = self.wakeup.notified() => {
                debug!("等待被控制操作打断");
            }
        }
    }
}
