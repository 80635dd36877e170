use serde::{Deserialize, Serialize};

/// 一条待执行的邀请任务，入队后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub subject: String,
}

impl Job {
    /// 规范化邀请对象：去掉首尾空白和一个前导 `@`，空对象返回 None
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let subject = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();
        if subject.is_empty() {
            None
        } else {
            Some(Self {
                subject: subject.to_string(),
            })
        }
    }

    /// 从输入列表构建任务队列，保持顺序，保留重复项
    pub fn queue_from<S: AsRef<str>>(subjects: &[S]) -> Vec<Job> {
        subjects.iter().filter_map(|s| Job::new(s.as_ref())).collect()
    }
}
