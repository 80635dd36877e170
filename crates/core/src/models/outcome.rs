use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 单个任务的执行结果状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Fail,
    Skipped,
}

/// 任务结果记录，只追加不修改
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutcomeRecord {
    pub subject: String,
    pub status: OutcomeStatus,
    pub error: Option<String>,
    pub worker: String,
    pub recorded_at: DateTime<Utc>,
}

impl OutcomeRecord {
    fn new(subject: &str, worker: &str, status: OutcomeStatus, error: Option<String>) -> Self {
        Self {
            subject: subject.to_string(),
            status,
            error,
            worker: worker.to_string(),
            recorded_at: Utc::now(),
        }
    }

    pub fn success(subject: &str, worker: &str) -> Self {
        Self::new(subject, worker, OutcomeStatus::Success, None)
    }

    pub fn fail(subject: &str, worker: &str, error: String) -> Self {
        Self::new(subject, worker, OutcomeStatus::Fail, Some(error))
    }

    pub fn skipped(subject: &str, worker: &str, reason: String) -> Self {
        Self::new(subject, worker, OutcomeStatus::Skipped, Some(reason))
    }
}
