//! Structured logging utilities
//!
//! Event-shaped log records for the dispatch loop and the control surface.

use tracing::{debug, info, warn};

/// Structured logging utilities
pub struct StructuredLogger;

impl StructuredLogger {
    /// Log run start
    pub fn log_run_started(generation: u64, group: &str, jobs: usize, workers: &[String]) {
        info!(
            event = "run_started",
            run.generation = generation,
            run.group = group,
            run.jobs = jobs,
            run.workers = ?workers,
            "Dispatch run started"
        );
    }

    /// Log run completion or halt
    pub fn log_run_finished(generation: u64, success: u64, fail: u64, reason: &str) {
        info!(
            event = "run_finished",
            run.generation = generation,
            run.success = success,
            run.fail = fail,
            run.reason = reason,
            "Dispatch run finished"
        );
    }

    /// Log worker selection
    pub fn log_worker_selected(subject: &str, worker: &str, pointer: usize) {
        debug!(
            event = "worker_selected",
            job.subject = subject,
            worker.name = worker,
            rotation.pointer = pointer,
            "Worker selected for job"
        );
    }

    /// Log successful invite
    pub fn log_invite_succeeded(subject: &str, worker: &str, group: &str) {
        info!(
            event = "invite_succeeded",
            job.subject = subject,
            worker.name = worker,
            group = group,
            "Invite succeeded"
        );
    }

    /// Log failed or skipped invite
    pub fn log_invite_failed(subject: &str, worker: &str, error: &str, skipped: bool) {
        warn!(
            event = if skipped { "invite_skipped" } else { "invite_failed" },
            job.subject = subject,
            worker.name = worker,
            invite.error = error,
            "Invite did not succeed"
        );
    }

    /// Log a new cooldown window
    pub fn log_cooldown_recorded(worker: &str, subject: &str, seconds: u64) {
        warn!(
            event = "cooldown_recorded",
            worker.name = worker,
            job.subject = subject,
            cooldown.seconds = seconds,
            "Worker rate limited"
        );
    }

    /// Log swallowed join failure
    pub fn log_join_failed(worker: &str, group: &str, error: &str) {
        warn!(
            event = "join_failed",
            worker.name = worker,
            group = group,
            join.error = error,
            "Join failed, continuing with invite"
        );
    }
}
