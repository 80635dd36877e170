pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

pub use config::{
    AccountConfig, ApiConfig, AppConfig, DispatcherConfig, LogFormat, ObservabilityConfig,
    SandboxConfig,
};
pub use errors::*;
pub use models::{
    CooldownEntry, Job, MAX_COOLDOWN_SECS, LastSeenWindow, MemberFilter, OutcomeRecord, OutcomeStatus, Participant,
    RunPhase, RunStats, StartRequest, WorkerInfo,
};
pub use traits::{
    AccountRegistry, DirectoryService, DispatchControlService, ParticipantStream, WorkerHandle,
};

/// 统一的Result类型
pub type InviterResult<T> = std::result::Result<T, InviterError>;
