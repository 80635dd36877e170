//! 邀请分发核心
//!
//! 包含冷却跟踪、轮询选择、结果日志、分发循环以及对外的控制接口。

pub mod classification;
pub mod controller;
pub mod cooldown;
pub mod dispatch_loop;
pub mod exporter;
pub mod outcome_log;
pub mod rotation;
pub mod run_state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use classification::InviteClassification;
pub use controller::DispatchController;
pub use cooldown::CooldownTracker;
pub use dispatch_loop::{CycleOutcome, DispatchLoop};
pub use exporter::MemberExporter;
pub use outcome_log::OutcomeLog;
pub use rotation::RoundRobinRotation;
pub use run_state::RunState;
