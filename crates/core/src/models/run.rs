use serde::{Deserialize, Serialize};

/// 分发循环所处的阶段
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    WaitingAllThrottled,
    Stopped,
}

/// 启动请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StartRequest {
    pub group: String,
    pub subjects: Vec<String>,
    pub workers: Vec<String>,
}

/// 当前运行的计数快照
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunStats {
    pub running: bool,
    pub phase: RunPhase,
    pub group: Option<String>,
    pub success_count: u64,
    pub fail_count: u64,
    pub processed: u64,
    pub total_jobs: usize,
}

impl RunStats {
    pub fn remaining(&self) -> usize {
        self.total_jobs.saturating_sub(self.processed as usize)
    }
}
