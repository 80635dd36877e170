use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use inviter_core::{
    AccountRegistry, CooldownEntry, DirectoryService, DispatchControlService, DispatcherConfig,
    InviteError, InviterError, InviterResult, Job, MemberFilter, OutcomeRecord, RunStats,
    StartRequest, WorkerInfo,
};
use inviter_infrastructure::{MetricsCollector, StructuredLogger};

use crate::dispatch_loop::DispatchLoop;
use crate::exporter::MemberExporter;
use crate::run_state::RunState;

/// 分发控制器
///
/// 持有唯一的运行状态，负责启动、停止、重启分发循环以及状态查询。
pub struct DispatchController {
    state: Arc<RwLock<RunState>>,
    directory: Arc<dyn DirectoryService>,
    registry: Arc<dyn AccountRegistry>,
    metrics: Arc<MetricsCollector>,
    exporter: MemberExporter,
    config: DispatcherConfig,
}

impl DispatchController {
    pub fn new(
        directory: Arc<dyn DirectoryService>,
        registry: Arc<dyn AccountRegistry>,
        metrics: Arc<MetricsCollector>,
        config: DispatcherConfig,
    ) -> Self {
        let exporter = MemberExporter::new(Arc::clone(&directory), Arc::clone(&registry));
        Self {
            state: Arc::new(RwLock::new(RunState::new())),
            directory,
            registry,
            metrics,
            exporter,
            config,
        }
    }

    /// 共享的运行状态
    pub fn state(&self) -> Arc<RwLock<RunState>> {
        Arc::clone(&self.state)
    }

    async fn known_workers(&self) -> InviterResult<HashSet<String>> {
        Ok(self
            .registry
            .list_workers()
            .await?
            .into_iter()
            .map(|w| w.name)
            .collect())
    }

    async fn prepare_run(&self, request: &StartRequest) -> InviterResult<PreparedRun> {
        let group = request.group.trim().to_string();
        if group.is_empty() {
            return Err(InviterError::invalid_request("群组不能为空"));
        }

        let workers: Vec<String> = request
            .workers
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        if workers.is_empty() {
            return Err(InviterError::invalid_request("至少需要选择一个账号"));
        }

        let known = self.known_workers().await?;
        if let Some(unknown) = workers.iter().find(|w| !known.contains(w.as_str())) {
            return Err(InviterError::worker_not_found(unknown.as_str()));
        }

        Ok(PreparedRun {
            group,
            workers,
            jobs: Job::queue_from(request.subjects.as_slice()),
        })
    }
}

/// 通过校验、等待启动的运行参数
struct PreparedRun {
    group: String,
    workers: Vec<String>,
    jobs: Vec<Job>,
}

#[async_trait]
impl DispatchControlService for DispatchController {
    async fn start(&self, request: StartRequest) -> InviterResult<String> {
        // 账号校验需要访问注册表，放在加锁之前完成
        let prepared = self.prepare_run(&request).await;

        let mut state = self.state.write().await;
        if state.is_running() {
            warn!("已有分发任务在运行，拒绝启动请求");
            return Err(InviterError::AlreadyRunning);
        }
        let PreparedRun {
            group,
            workers,
            jobs,
        } = prepared?;
        let total = jobs.len();

        state.reset();
        let generation = state.begin(&group, total);
        let wakeup = state.wakeup();
        drop(state);

        self.metrics.record_run_started();
        self.metrics.update_queue_remaining(total);
        StructuredLogger::log_run_started(generation, &group, total, &workers);

        let worker_count = workers.len();
        let dispatch_loop = DispatchLoop::new(
            generation,
            group.clone(),
            jobs,
            workers,
            Arc::clone(&self.state),
            wakeup,
            Arc::clone(&self.directory),
            Arc::clone(&self.registry),
            Arc::clone(&self.metrics),
            self.config.clone(),
        );
        tokio::spawn(dispatch_loop.run());

        Ok(format!(
            "已开始向群组 {} 分发 {} 个邀请任务，使用 {} 个账号",
            group, total, worker_count
        ))
    }

    async fn stop(&self) -> InviterResult<String> {
        let was_running = self.state.write().await.halt();
        if was_running {
            info!("分发已停止");
            Ok("分发已停止".to_string())
        } else {
            debug!("收到停止请求，但当前没有运行中的分发");
            Ok("当前没有运行中的分发".to_string())
        }
    }

    async fn restart(&self) -> InviterResult<String> {
        self.state.write().await.reset();
        self.metrics.update_queue_remaining(0);
        self.metrics.update_throttled_workers(0);
        info!("分发已重置，计数、结果日志和冷却记录已清空");
        Ok("分发已重置".to_string())
    }

    async fn retry_single(&self, subject: &str, group: &str) -> InviterResult<String> {
        let job =
            Job::new(subject).ok_or_else(|| InviterError::invalid_request("邀请对象不能为空"))?;
        let group = group.trim();
        if group.is_empty() {
            return Err(InviterError::invalid_request("群组不能为空"));
        }

        let workers = self.registry.list_workers().await?;
        let worker = {
            let mut rng = rand::rng();
            workers.choose(&mut rng).map(|w| w.name.clone())
        }
        .ok_or(InviterError::NoWorkersAvailable)?;

        let handle = self
            .registry
            .handle(&worker)
            .await
            .ok_or_else(|| InviteError::other("account not connected"))?;

        if let Err(e) = self.directory.ensure_joined(&handle, group).await {
            StructuredLogger::log_join_failed(&worker, group, &e.to_string());
        }

        match self.directory.invite(&handle, group, &job.subject).await {
            Ok(()) => {
                info!("单独重试成功: {} 通过账号 {}", job.subject, worker);
                Ok(format!("{} 已通过账号 {} 邀请成功", job.subject, worker))
            }
            Err(e) => {
                warn!("单独重试失败: {} 通过账号 {}: {}", job.subject, worker, e);
                Err(e.into())
            }
        }
    }

    async fn stats(&self) -> RunStats {
        self.state.read().await.stats()
    }

    async fn outcomes(&self) -> Vec<OutcomeRecord> {
        self.state.read().await.outcomes.records().to_vec()
    }

    async fn cooldowns(&self) -> Vec<CooldownEntry> {
        self.state.read().await.cooldowns.active_entries()
    }

    async fn workers(&self) -> InviterResult<Vec<WorkerInfo>> {
        self.registry.list_workers().await
    }

    async fn export_members(
        &self,
        worker: &str,
        group: &str,
        filter: MemberFilter,
    ) -> InviterResult<Vec<String>> {
        self.exporter.export(worker, group, &filter).await
    }
}
