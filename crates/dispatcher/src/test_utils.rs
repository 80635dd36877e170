pub mod mocks {
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use futures::stream;

    use inviter_core::{
        AccountRegistry, DirectoryService, InviteError, InviterError, InviterResult,
        Participant, ParticipantStream, WorkerHandle, WorkerInfo,
    };

    /// 一次邀请调用的记录
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct InviteCall {
        pub worker: String,
        pub group: String,
        pub subject: String,
    }

    /// 按对象预设返回结果的目录服务，未预设的对象邀请成功
    #[derive(Default)]
    pub struct ScriptedDirectory {
        responses: Mutex<HashMap<String, VecDeque<Result<(), InviteError>>>>,
        calls: Mutex<Vec<InviteCall>>,
        joins: Mutex<Vec<(String, String)>>,
        participants: Vec<InviterResult<Participant>>,
        join_error: Option<String>,
        latency: Option<Duration>,
    }

    impl ScriptedDirectory {
        pub fn new() -> Self {
            Self::default()
        }

        /// 为对象追加一次返回结果，多次调用按顺序消费
        pub fn respond(self, subject: &str, result: Result<(), InviteError>) -> Self {
            self.responses
                .lock()
                .unwrap()
                .entry(subject.to_string())
                .or_default()
                .push_back(result);
            self
        }

        pub fn with_participants(mut self, participants: Vec<Participant>) -> Self {
            self.participants = participants.into_iter().map(Ok).collect();
            self
        }

        pub fn with_participant_error(mut self, message: &str) -> Self {
            self.participants.push(Err(InviterError::directory(message)));
            self
        }

        pub fn with_join_error(mut self, message: &str) -> Self {
            self.join_error = Some(message.to_string());
            self
        }

        /// 每次邀请调用前的模拟耗时
        pub fn with_latency(mut self, latency: Duration) -> Self {
            self.latency = Some(latency);
            self
        }

        pub fn calls(&self) -> Vec<InviteCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn invited_workers(&self) -> Vec<String> {
            self.calls().into_iter().map(|c| c.worker).collect()
        }

        pub fn joins(&self) -> Vec<(String, String)> {
            self.joins.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DirectoryService for ScriptedDirectory {
        async fn ensure_joined(&self, handle: &WorkerHandle, group: &str) -> InviterResult<()> {
            self.joins
                .lock()
                .unwrap()
                .push((handle.account.clone(), group.to_string()));
            match &self.join_error {
                Some(message) => Err(InviterError::directory(message.clone())),
                None => Ok(()),
            }
        }

        async fn invite(
            &self,
            handle: &WorkerHandle,
            group: &str,
            subject: &str,
        ) -> Result<(), InviteError> {
            self.calls.lock().unwrap().push(InviteCall {
                worker: handle.account.clone(),
                group: group.to_string(),
                subject: subject.to_string(),
            });
            if let Some(latency) = self.latency {
                tokio::time::sleep(latency).await;
            }
            self.responses
                .lock()
                .unwrap()
                .get_mut(subject)
                .and_then(|queue| queue.pop_front())
                .unwrap_or(Ok(()))
        }

        async fn list_participants(
            &self,
            _handle: &WorkerHandle,
            _group: &str,
        ) -> InviterResult<ParticipantStream> {
            let items: Vec<InviterResult<Participant>> = self
                .participants
                .iter()
                .map(|item| match item {
                    Ok(participant) => Ok(participant.clone()),
                    Err(e) => Err(InviterError::directory(e.to_string())),
                })
                .collect();
            Ok(Box::pin(stream::iter(items)))
        }
    }

    /// 固定账号列表的注册表，可以模拟某个账号断开连接
    #[derive(Default)]
    pub struct StaticRegistry {
        workers: Vec<WorkerInfo>,
        disconnected: Vec<String>,
        latency: Option<Duration>,
    }

    impl StaticRegistry {
        pub fn new(names: &[&str]) -> Self {
            Self {
                workers: names.iter().map(|n| WorkerInfo::new(*n, None)).collect(),
                disconnected: Vec::new(),
                latency: None,
            }
        }

        pub fn empty() -> Self {
            Self::default()
        }

        pub fn disconnect(mut self, name: &str) -> Self {
            self.disconnected.push(name.to_string());
            self
        }

        /// 每次列出账号前的模拟耗时
        pub fn with_latency(mut self, latency: Duration) -> Self {
            self.latency = Some(latency);
            self
        }
    }

    #[async_trait]
    impl AccountRegistry for StaticRegistry {
        async fn list_workers(&self) -> InviterResult<Vec<WorkerInfo>> {
            if let Some(latency) = self.latency {
                tokio::time::sleep(latency).await;
            }
            Ok(self.workers.clone())
        }

        async fn handle(&self, name: &str) -> Option<WorkerHandle> {
            let known = self.workers.iter().any(|w| w.name == name);
            if known && !self.disconnected.iter().any(|d| d == name) {
                Some(WorkerHandle::new(name))
            } else {
                None
            }
        }
    }

    pub fn participant(
        identifier: &str,
        username: Option<&str>,
        has_photo: bool,
        last_seen: Option<i64>,
    ) -> Participant {
        Participant {
            identifier: identifier.to_string(),
            username: username.map(str::to_string),
            has_photo,
            last_seen,
        }
    }
}
