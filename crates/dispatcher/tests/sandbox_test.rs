use std::sync::Arc;
use std::time::Duration;

use inviter_core::{
    AccountConfig, DispatchControlService, DispatcherConfig, MemberFilter, OutcomeStatus,
    SandboxConfig, StartRequest,
};
use inviter_dispatcher::DispatchController;
use inviter_infrastructure::{ConfigAccountRegistry, InMemoryDirectory, MetricsCollector};

fn accounts(names: &[&str]) -> Vec<AccountConfig> {
    names
        .iter()
        .map(|name| AccountConfig {
            name: name.to_string(),
            phone: None,
        })
        .collect()
}

fn sandbox_controller(sandbox: SandboxConfig, invite_delay_ms: u64) -> DispatchController {
    DispatchController::new(
        Arc::new(InMemoryDirectory::with_config(sandbox)),
        Arc::new(ConfigAccountRegistry::new(&accounts(&["w1", "w2"]))),
        Arc::new(MetricsCollector::new()),
        DispatcherConfig {
            invite_delay_ms,
            ..Default::default()
        },
    )
}

#[tokio::test(start_paused = true)]
async fn test_sandbox_run_with_flood_and_policy() {
    let controller = sandbox_controller(
        SandboxConfig {
            flood_after_invites: 2,
            flood_wait_seconds: 60,
            banned: vec!["mallory".to_string()],
            ..Default::default()
        },
        1_000,
    );

    controller
        .start(StartRequest {
            group: "sandbox".to_string(),
            subjects: ["a", "b", "mallory", "c", "d", "e", "a"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            workers: vec!["w1".to_string(), "w2".to_string()],
        })
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_secs(300)).await;

    let stats = controller.stats().await;
    assert!(!stats.running);
    assert_eq!(stats.processed, 7);
    assert_eq!(stats.success_count + stats.fail_count, 7);

    let outcomes = controller.outcomes().await;
    let mallory = outcomes.iter().find(|o| o.subject == "mallory").unwrap();
    assert_eq!(mallory.status, OutcomeStatus::Skipped);
    assert_eq!(outcomes.last().unwrap().status, OutcomeStatus::Skipped);

    let members = controller
        .export_members("w1", "sandbox", MemberFilter::default())
        .await
        .unwrap();
    assert_eq!(members.len() as u64, stats.success_count);
}
