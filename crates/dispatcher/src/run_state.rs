use std::sync::Arc;

use tokio::sync::Notify;

use inviter_core::{OutcomeRecord, RunPhase, RunStats};

use crate::cooldown::CooldownTracker;
use crate::outcome_log::OutcomeLog;

/// 单次分发运行的共享状态
///
/// 只由分发循环和控制接口修改，状态查询可以在循环运行时并发读取。
#[derive(Debug)]
pub struct RunState {
    running: bool,
    phase: RunPhase,
    generation: u64,
    group: Option<String>,
    total_jobs: usize,
    pub outcomes: OutcomeLog,
    pub cooldowns: CooldownTracker,
    wakeup: Arc<Notify>,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            running: false,
            phase: RunPhase::Idle,
            generation: 0,
            group: None,
            total_jobs: 0,
            outcomes: OutcomeLog::new(),
            cooldowns: CooldownTracker::new(),
            wakeup: Arc::new(Notify::new()),
        }
    }
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn wakeup(&self) -> Arc<Notify> {
        Arc::clone(&self.wakeup)
    }

    /// 开始新的运行，返回本次运行的代号
    pub fn begin(&mut self, group: &str, total_jobs: usize) -> u64 {
        self.generation += 1;
        self.running = true;
        self.phase = RunPhase::Running;
        self.group = Some(group.to_string());
        self.total_jobs = total_jobs;
        self.wakeup = Arc::new(Notify::new());
        self.generation
    }

    /// 停止当前运行并唤醒正在等待的循环，返回之前是否在运行
    pub fn halt(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        if was_running {
            self.phase = RunPhase::Stopped;
        }
        self.wakeup.notify_one();
        was_running
    }

    /// 停止并清空计数、结果日志和冷却记录
    ///
    /// 代号同时递增，正在进行中的那一步结果不会再被记录。
    pub fn reset(&mut self) {
        self.halt();
        self.generation += 1;
        self.phase = RunPhase::Idle;
        self.group = None;
        self.total_jobs = 0;
        self.outcomes.clear();
        self.cooldowns.clear();
    }

    /// 指定代号的运行是否仍然有效
    pub fn is_current(&self, generation: u64) -> bool {
        self.running && self.generation == generation
    }

    /// 仅在代号一致时记录结果
    pub fn record_outcome(&mut self, generation: u64, record: OutcomeRecord) -> bool {
        if self.generation != generation {
            return false;
        }
        self.outcomes.record(record);
        true
    }

    pub fn set_phase(&mut self, generation: u64, phase: RunPhase) {
        if self.is_current(generation) {
            self.phase = phase;
        }
    }

    /// 队列处理完毕
    pub fn finish(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.running = false;
        self.phase = RunPhase::Stopped;
        true
    }

    pub fn stats(&self) -> RunStats {
        RunStats {
            running: self.running,
            phase: self.phase,
            group: self.group.clone(),
            success_count: self.outcomes.success_count(),
            fail_count: self.outcomes.fail_count(),
            processed: self.outcomes.processed(),
            total_jobs: self.total_jobs,
        }
    }
}
