//! 配置管理
//!
//! 配置加载顺序：
//! 1. 内置默认值
//! 2. TOML 配置文件
//! 3. 环境变量覆盖（前缀 `INVITER`，分隔符 `__`）

pub mod models;

pub use models::{
    AccountConfig, ApiConfig, AppConfig, DispatcherConfig, LogFormat, ObservabilityConfig,
    SandboxConfig,
};
