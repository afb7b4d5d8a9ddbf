use super::*;

/// Tests a member with a nickname joining voice with restore enabled.
///
/// Verifies that the member is renamed from the pool, the original nickname is
/// recorded for the later restore and the rename counter goes up.
///
/// Expected: Renamed with pending restore holding "Marco"
#[tokio::test]
async fn renames_member_and_records_original() {
    let test = TestEngine::new(true).await;

    let outcome = test.join(CHANNEL_ID, member(100, Some("Marco"))).await;

    assert_eq!(outcome, renamed());
    assert_eq!(test.members.calls(), vec![call(100, Some("Gino Panino"))]);
    let identity = test.store.get_identity(GUILD_ID, 100).await.unwrap().unwrap();
    assert_eq!(identity.original_nickname, Some("Marco".to_string()));
    assert_eq!(identity.assigned_nickname, "Gino Panino");
    assert_eq!(test.rename_count().await, 1);
}

/// Tests joining with restore disabled.
///
/// Expected: Renamed without a pending restore
#[tokio::test]
async fn keeps_no_state_when_restore_disabled() {
    let test = TestEngine::new(false).await;

    let outcome = test.join(CHANNEL_ID, member(100, Some("Marco"))).await;

    assert_eq!(outcome, renamed());
    assert!(test.store.get_identity(GUILD_ID, 100).await.unwrap().is_none());
    assert_eq!(test.rename_count().await, 1);
}

/// Tests that a member holding the immunity role is left alone.
///
/// Expected: Skipped(Immune) with no Discord call
#[tokio::test]
async fn skips_immune_member() {
    let test = TestEngine::new(true).await;
    let mut immune = member(100, Some("Marco"));
    immune.role_ids = vec![7, IMMUNITY_ROLE_ID];

    let outcome = test.join(CHANNEL_ID, immune).await;

    assert_eq!(outcome, Outcome::Skipped(SkipReason::Immune));
    assert!(test.members.calls().is_empty());
    assert_eq!(test.rename_count().await, 0);
}

/// Tests joining an excluded channel.
///
/// Expected: Skipped(ExcludedChannel) with no Discord call
#[tokio::test]
async fn skips_excluded_channel() {
    let test = TestEngine::new(true).await;

    let outcome = test.join(EXCLUDED_CHANNEL_ID, member(100, None)).await;

    assert_eq!(outcome, Outcome::Skipped(SkipReason::ExcludedChannel));
    assert!(test.members.calls().is_empty());
    assert!(test.store.get_identity(GUILD_ID, 100).await.unwrap().is_none());
}

/// Tests that the guild owner and the bot itself are never renamed.
///
/// Expected: Skipped(OwnerOrSelf) for both
#[tokio::test]
async fn skips_owner_and_self() {
    let test = TestEngine::new(true).await;
    let mut owner = member(100, None);
    owner.is_guild_owner = true;
    let mut bot = member(200, None);
    bot.is_bot_self = true;

    let owner_outcome = test.join(CHANNEL_ID, owner).await;
    let bot_outcome = test.join(CHANNEL_ID, bot).await;

    assert_eq!(owner_outcome, Outcome::Skipped(SkipReason::OwnerOrSelf));
    assert_eq!(bot_outcome, Outcome::Skipped(SkipReason::OwnerOrSelf));
    assert!(test.members.calls().is_empty());
}

/// Tests that a disabled guild ignores joins.
///
/// Expected: Skipped(Disabled)
#[tokio::test]
async fn skips_when_disabled() {
    let test = TestEngine::new(true).await;
    ServerSettingsService::new(test.store.as_ref())
        .set_enabled(GUILD_ID, false)
        .await
        .unwrap();

    let outcome = test.join(CHANNEL_ID, member(100, None)).await;

    assert_eq!(outcome, Outcome::Skipped(SkipReason::Disabled));
    assert!(test.members.calls().is_empty());
}

/// Tests joining while the pool is empty.
///
/// Expected: Skipped(EmptyPool) and no pending restore
#[tokio::test]
async fn skips_when_pool_empty() {
    let test = TestEngine::new(true).await;
    test.store
        .put_pool(&NicknamePool {
            guild_id: GUILD_ID,
            entries: Vec::new(),
        })
        .await
        .unwrap();

    let outcome = test.join(CHANNEL_ID, member(100, None)).await;

    assert_eq!(outcome, Outcome::Skipped(SkipReason::EmptyPool));
    assert!(test.members.calls().is_empty());
    assert!(test.store.get_identity(GUILD_ID, 100).await.unwrap().is_none());
}

/// Tests a rename rejected by Discord.
///
/// Verifies that the failure is reported without bumping the rename counter.
///
/// Expected: RenameFailed(PermissionDenied) and rename_count unchanged
#[tokio::test]
async fn failed_rename_is_not_counted() {
    let err = RenameError::PermissionDenied("Missing Permissions".to_string());
    let test = TestEngine::with_members(true, RecordingMemberApi::failing_always(err.clone())).await;

    let outcome = test.join(CHANNEL_ID, member(100, None)).await;

    assert_eq!(outcome, Outcome::RenameFailed(err));
    assert_eq!(test.rename_count().await, 0);
}

/// Tests a second join without a leave in between.
///
/// Verifies that the record is overwritten with the nickname seen at the second join.
///
/// Expected: pending restore holds the nickname from the second join
#[tokio::test]
async fn second_join_overwrites_original() {
    let test = TestEngine::new(true).await;

    test.join(CHANNEL_ID, member(100, Some("Marco"))).await;
    test.join(CHANNEL_ID, member(100, Some("Gino Panino"))).await;

    let identity = test.store.get_identity(GUILD_ID, 100).await.unwrap().unwrap();
    assert_eq!(identity.original_nickname, Some("Gino Panino".to_string()));
    assert_eq!(test.rename_count().await, 2);
}

/// Tests the first join of an unknown guild.
///
/// Verifies that default settings and the default pool are created on the fly.
///
/// Expected: Renamed with a default nickname
#[tokio::test]
async fn creates_settings_for_unknown_guild() {
    let store: Arc<dyn ConfigStore> = Arc::new(MemoryStore::new());
    let members = Arc::new(RecordingMemberApi::new());
    let engine = IdentityEngine::new(store.clone(), members.clone());

    let outcome = engine
        .handle(VoiceEvent::Joined {
            guild_id: 2,
            channel_id: CHANNEL_ID,
            member: member(100, None),
        })
        .await;

    let Outcome::Renamed { nickname } = outcome else {
        panic!("expected rename, got {:?}", outcome);
    };
    let pool = store.get_pool(2).await.unwrap().unwrap();
    assert!(pool.contains(&nickname));
    assert_eq!(store.get_settings(2).await.unwrap().unwrap().rename_count, 1);
}
