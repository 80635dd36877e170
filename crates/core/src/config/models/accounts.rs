use serde::{Deserialize, Serialize};

/// 单个账号的配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountConfig {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl AccountConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow::anyhow!("账号名称不能为空"));
        }
        Ok(())
    }
}
