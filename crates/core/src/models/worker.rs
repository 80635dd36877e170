use serde::{Deserialize, Serialize};

/// 账号（Worker）信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerInfo {
    pub name: String,
    pub phone: Option<String>,
}

impl WorkerInfo {
    pub fn new<S: Into<String>>(name: S, phone: Option<String>) -> Self {
        Self {
            name: name.into(),
            phone,
        }
    }
}
