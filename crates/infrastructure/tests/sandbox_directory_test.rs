use std::time::Duration;

use futures::TryStreamExt;
use inviter_core::{
    AccountConfig, AccountRegistry, DirectoryService, InviteError, Participant, SandboxConfig,
};
use inviter_infrastructure::{ConfigAccountRegistry, InMemoryDirectory};

fn registry() -> ConfigAccountRegistry {
    ConfigAccountRegistry::new(&[
        AccountConfig {
            name: "w1".to_string(),
            phone: Some("+10000000001".to_string()),
        },
        AccountConfig {
            name: "w2".to_string(),
            phone: None,
        },
    ])
}

#[tokio::test]
async fn test_registry_handles_drive_directory() {
    let registry = registry();
    let directory = InMemoryDirectory::new();

    let handle = registry.handle("w2").await.unwrap();
    directory.ensure_joined(&handle, "group").await.unwrap();
    directory.invite(&handle, "group", "alice").await.unwrap();

    let members: Vec<Participant> = directory
        .list_participants(&handle, "group")
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].handle(), "alice");
    assert!(registry.handle("w3").await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_flood_is_per_account() {
    let registry = registry();
    let directory = InMemoryDirectory::with_config(SandboxConfig {
        flood_after_invites: 1,
        flood_wait_seconds: 30,
        ..Default::default()
    });
    let w1 = registry.handle("w1").await.unwrap();
    let w2 = registry.handle("w2").await.unwrap();
    for handle in [&w1, &w2] {
        directory.ensure_joined(handle, "group").await.unwrap();
    }

    directory.invite(&w1, "group", "a").await.unwrap();
    assert_eq!(
        directory.invite(&w1, "group", "b").await,
        Err(InviteError::RateLimited { seconds: 30 })
    );
    directory.invite(&w2, "group", "b").await.unwrap();

    tokio::time::advance(Duration::from_secs(31)).await;
    directory.invite(&w1, "group", "c").await.unwrap();
}

#[tokio::test]
async fn test_policy_lists() {
    let registry = registry();
    let directory = InMemoryDirectory::with_config(SandboxConfig {
        banned: vec!["mallory".to_string()],
        privacy_restricted: vec!["eve".to_string()],
        ..Default::default()
    });
    let handle = registry.handle("w1").await.unwrap();
    directory.ensure_joined(&handle, "group").await.unwrap();

    assert_eq!(
        directory.invite(&handle, "group", "mallory").await,
        Err(InviteError::Banned)
    );
    assert_eq!(
        directory.invite(&handle, "group", "eve").await,
        Err(InviteError::PrivacyRestricted)
    );
    directory.invite(&handle, "group", "bob").await.unwrap();
    assert_eq!(
        directory.invite(&handle, "group", "bob").await,
        Err(InviteError::AlreadyMember)
    );
}
