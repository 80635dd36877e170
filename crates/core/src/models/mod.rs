pub mod cooldown;
pub mod job;
pub mod outcome;
pub mod participant;
pub mod run;
pub mod worker;

pub use cooldown::{CooldownEntry, MAX_COOLDOWN_SECS};
pub use job::Job;
pub use outcome::{OutcomeRecord, OutcomeStatus};
pub use participant::{LastSeenWindow, MemberFilter, Participant};
pub use run::{RunPhase, RunStats, StartRequest};
pub use worker::WorkerInfo;
