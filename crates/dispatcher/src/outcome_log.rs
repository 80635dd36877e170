use inviter_core::{OutcomeRecord, OutcomeStatus};

/// 结果日志：按插入顺序追加记录，同时维护成功/失败计数
///
/// 跳过的任务计入失败计数。
#[derive(Debug, Default, Clone)]
pub struct OutcomeLog {
    records: Vec<OutcomeRecord>,
    success_count: u64,
    fail_count: u64,
}

impl OutcomeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: OutcomeRecord) {
        match record.status {
            OutcomeStatus::Success => self.success_count += 1,
            OutcomeStatus::Fail | OutcomeStatus::Skipped => self.fail_count += 1,
        }
        self.records.push(record);
    }

    pub fn records(&self) -> &[OutcomeRecord] {
        &self.records
    }

    pub fn success_count(&self) -> u64 {
        self.success_count
    }

    pub fn fail_count(&self) -> u64 {
        self.fail_count
    }

    pub fn processed(&self) -> u64 {
        self.success_count + self.fail_count
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.success_count = 0;
        self.fail_count = 0;
    }
}
