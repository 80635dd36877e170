#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use inviter_core::{
        DispatchControlService, DispatcherConfig, InviteError, InviterError, MemberFilter,
        RunPhase, StartRequest,
    };
    use inviter_dispatcher::test_utils::mocks::{participant, ScriptedDirectory, StaticRegistry};
    use inviter_dispatcher::DispatchController;
    use inviter_infrastructure::MetricsCollector;

    fn controller_with(
        directory: &Arc<ScriptedDirectory>,
        registry: StaticRegistry,
        invite_delay_ms: u64,
    ) -> DispatchController {
        DispatchController::new(
            directory.clone(),
            Arc::new(registry),
            Arc::new(MetricsCollector::new()),
            DispatcherConfig {
                invite_delay_ms,
                ..Default::default()
            },
        )
    }

    fn request(group: &str, subjects: &[&str], workers: &[&str]) -> StartRequest {
        StartRequest {
            group: group.to_string(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            workers: workers.iter().map(|w| w.to_string()).collect(),
        }
    }

    async fn advance(seconds: u64) {
        tokio::time::sleep(Duration::from_secs(seconds)).await;
    }

    #[tokio::test]
    async fn test_start_requires_workers() {
        let directory = Arc::new(ScriptedDirectory::new());
        let controller = controller_with(&directory, StaticRegistry::new(&["w1"]), 0);

        let err = controller
            .start(request("group", &["a"], &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, InviterError::InvalidRequest(_)));
        assert!(!controller.stats().await.running);
    }

    #[tokio::test]
    async fn test_start_requires_group() {
        let directory = Arc::new(ScriptedDirectory::new());
        let controller = controller_with(&directory, StaticRegistry::new(&["w1"]), 0);

        let err = controller
            .start(request("   ", &["a"], &["w1"]))
            .await
            .unwrap_err();
        assert!(matches!(err, InviterError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_start_rejects_unknown_worker() {
        let directory = Arc::new(ScriptedDirectory::new());
        let controller = controller_with(&directory, StaticRegistry::new(&["w1"]), 0);

        let err = controller
            .start(request("group", &["a"], &["w1", "ghost"]))
            .await
            .unwrap_err();
        match err {
            InviterError::WorkerNotFound { name } => assert_eq!(name, "ghost"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(directory.call_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_while_running_is_rejected() {
        let directory = Arc::new(ScriptedDirectory::new());
        let controller = controller_with(&directory, StaticRegistry::new(&["w1", "w2"]), 30_000);

        controller
            .start(request("first", &["a", "b"], &["w1"]))
            .await
            .unwrap();
        advance(1).await;

        let err = controller
            .start(request("second", &["x", "y", "z"], &["w2"]))
            .await
            .unwrap_err();
        assert!(matches!(err, InviterError::AlreadyRunning));

        let stats = controller.stats().await;
        assert!(stats.running);
        assert_eq!(stats.group.as_deref(), Some("first"));
        assert_eq!(stats.total_jobs, 2);
        assert_eq!(stats.success_count, 1);

        advance(30).await;
        assert!(directory.calls().iter().all(|c| c.group == "first"));
        assert_eq!(controller.stats().await.success_count, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_running_takes_precedence_over_validation() {
        let directory = Arc::new(ScriptedDirectory::new());
        let controller = controller_with(&directory, StaticRegistry::new(&["w1"]), 30_000);

        controller
            .start(request("group", &["a", "b"], &["w1"]))
            .await
            .unwrap();

        let err = controller
            .start(request("  ", &["x"], &["w9"]))
            .await
            .unwrap_err();
        assert!(matches!(err, InviterError::AlreadyRunning));
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_queries_do_not_wait_for_worker_lookup() {
        let directory = Arc::new(ScriptedDirectory::new());
        let registry = StaticRegistry::new(&["w1"]).with_latency(Duration::from_secs(5));
        let controller = Arc::new(controller_with(&directory, registry, 0));

        let starting = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move { controller.start(request("group", &["a"], &["w1"])).await })
        };
        advance(1).await;

        let stats = tokio::time::timeout(Duration::from_millis(10), controller.stats())
            .await
            .expect("状态查询不应等待账号校验");
        assert!(!stats.running);
        assert_eq!(directory.call_count(), 0);

        starting.await.unwrap().unwrap();
        advance(1).await;
        assert_eq!(controller.stats().await.success_count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent_and_lets_in_flight_step_finish() {
        let directory = Arc::new(ScriptedDirectory::new().with_latency(Duration::from_secs(10)));
        let controller = controller_with(&directory, StaticRegistry::new(&["w1"]), 0);

        controller
            .start(request("group", &["a", "b", "c"], &["w1"]))
            .await
            .unwrap();
        advance(1).await;

        controller.stop().await.unwrap();
        controller.stop().await.unwrap();
        advance(20).await;

        let stats = controller.stats().await;
        assert!(!stats.running);
        assert_eq!(stats.phase, RunPhase::Stopped);
        assert_eq!(stats.success_count, 1);
        assert_eq!(directory.call_count(), 1);
    }

    #[tokio::test]
    async fn test_stop_without_run() {
        let directory = Arc::new(ScriptedDirectory::new());
        let controller = controller_with(&directory, StaticRegistry::new(&["w1"]), 0);

        assert!(controller.stop().await.is_ok());
        assert_eq!(controller.stats().await.phase, RunPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_clears_state_and_discards_in_flight_result() {
        let directory = Arc::new(
            ScriptedDirectory::new()
                .respond("a", Err(InviteError::RateLimited { seconds: 300 }))
                .with_latency(Duration::from_secs(10)),
        );
        let controller = controller_with(&directory, StaticRegistry::new(&["w1", "w2"]), 0);

        controller
            .start(request("group", &["a", "b", "c"], &["w1", "w2"]))
            .await
            .unwrap();
        advance(15).await;
        assert_eq!(controller.cooldowns().await.len(), 1);

        // b 的邀请正在进行中
        controller.restart().await.unwrap();
        advance(60).await;

        let stats = controller.stats().await;
        assert!(!stats.running);
        assert_eq!(stats.phase, RunPhase::Idle);
        assert_eq!((stats.success_count, stats.fail_count), (0, 0));
        assert!(controller.outcomes().await.is_empty());
        assert!(controller.cooldowns().await.is_empty());
        assert_eq!(directory.call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_then_start_runs_single_loop() {
        let directory = Arc::new(ScriptedDirectory::new().with_latency(Duration::from_secs(10)));
        let controller = controller_with(&directory, StaticRegistry::new(&["w1"]), 0);

        controller
            .start(request("group", &["a", "b", "c"], &["w1"]))
            .await
            .unwrap();
        advance(1).await;
        controller.stop().await.unwrap();
        controller
            .start(request("group", &["x", "y"], &["w1"]))
            .await
            .unwrap();
        advance(60).await;

        let subjects: Vec<String> = controller
            .outcomes()
            .await
            .into_iter()
            .map(|o| o.subject)
            .collect();
        assert_eq!(subjects, vec!["x", "y"]);

        let invited: Vec<String> = directory.calls().into_iter().map(|c| c.subject).collect();
        assert_eq!(invited, vec!["a", "x", "y"]);
        assert!(!controller.stats().await.running);
    }

    #[tokio::test]
    async fn test_retry_single_does_not_touch_run_state() {
        let directory = Arc::new(ScriptedDirectory::new());
        let controller = controller_with(&directory, StaticRegistry::new(&["w1", "w2"]), 0);

        let message = controller.retry_single("@alice", "group").await.unwrap();
        assert!(message.contains("alice"));

        let calls = directory.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].subject, "alice");
        assert!(["w1", "w2"].contains(&calls[0].worker.as_str()));
        assert_eq!(directory.joins().len(), 1);

        let stats = controller.stats().await;
        assert_eq!(stats.processed, 0);
        assert!(controller.outcomes().await.is_empty());
    }

    #[tokio::test]
    async fn test_retry_single_reports_classified_error() {
        let directory =
            Arc::new(ScriptedDirectory::new().respond("bob", Err(InviteError::PrivacyRestricted)));
        let controller = controller_with(&directory, StaticRegistry::new(&["w1"]), 0);

        let err = controller.retry_single("bob", "group").await.unwrap_err();
        assert!(matches!(
            err,
            InviterError::Invite(InviteError::PrivacyRestricted)
        ));
        assert!(controller.outcomes().await.is_empty());
    }

    #[tokio::test]
    async fn test_retry_single_without_workers() {
        let directory = Arc::new(ScriptedDirectory::new());
        let controller = controller_with(&directory, StaticRegistry::empty(), 0);

        let err = controller.retry_single("alice", "group").await.unwrap_err();
        assert!(matches!(err, InviterError::NoWorkersAvailable));
    }

    #[tokio::test]
    async fn test_retry_single_rejects_blank_subject() {
        let directory = Arc::new(ScriptedDirectory::new());
        let controller = controller_with(&directory, StaticRegistry::new(&["w1"]), 0);

        let err = controller.retry_single(" @ ", "group").await.unwrap_err();
        assert!(matches!(err, InviterError::InvalidRequest(_)));
        assert_eq!(directory.call_count(), 0);
    }

    #[tokio::test]
    async fn test_workers_and_export() {
        let directory = Arc::new(ScriptedDirectory::new().with_participants(vec![
            participant("1", Some("alice"), true, None),
            participant("2", None, false, None),
        ]));
        let controller = controller_with(&directory, StaticRegistry::new(&["w1", "w2"]), 0);

        let names: Vec<String> = controller
            .workers()
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.name)
            .collect();
        assert_eq!(names, vec!["w1", "w2"]);

        let filter = MemberFilter {
            has_username: true,
            ..Default::default()
        };
        let members = controller
            .export_members("w2", "group", filter)
            .await
            .unwrap();
        assert_eq!(members, vec!["alice"]);
        assert_eq!(directory.joins(), vec![("w2".to_string(), "group".to_string())]);
    }
}
