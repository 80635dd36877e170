use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 群组成员
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub identifier: String,
    pub username: Option<String>,
    pub has_photo: bool,
    /// 最后在线时间（Unix秒）
    pub last_seen: Option<i64>,
}

impl Participant {
    /// 导出用标识：优先用户名，否则原始标识
    pub fn handle(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.identifier)
    }
}

/// 最后在线时间窗口
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LastSeenWindow {
    Week,
    Month,
    #[default]
    Any,
}

impl LastSeenWindow {
    pub fn max_age(&self) -> Option<chrono::Duration> {
        match self {
            LastSeenWindow::Week => Some(chrono::Duration::days(7)),
            LastSeenWindow::Month => Some(chrono::Duration::days(30)),
            LastSeenWindow::Any => None,
        }
    }
}

/// 成员导出过滤条件，各条件之间为与关系
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberFilter {
    pub has_username: bool,
    pub has_photo: bool,
    pub last_seen: LastSeenWindow,
}

impl MemberFilter {
    pub fn matches(&self, participant: &Participant, now: DateTime<Utc>) -> bool {
        if self.has_username && participant.username.is_none() {
            return false;
        }
        if self.has_photo && !participant.has_photo {
            return false;
        }
        match self.last_seen.max_age() {
            None => true,
            Some(max_age) => participant
                .last_seen
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
                .map(|seen| now - seen <= max_age)
                .unwrap_or(false),
        }
    }
}
