use super::*;

/// Tests the full join and leave cycle of a member with a nickname.
///
/// Expected: Restored with "Marco" and the pending restore removed
#[tokio::test]
async fn restores_original_nickname() {
    let test = TestEngine::new(true).await;
    test.join(CHANNEL_ID, member(100, Some("Marco"))).await;

    let outcome = test.leave(100).await;

    assert_eq!(
        outcome,
        Outcome::Restored {
            nickname: Some("Marco".to_string())
        }
    );
    assert_eq!(
        test.members.calls(),
        vec![call(100, Some("Gino Panino")), call(100, Some("Marco"))]
    );
    assert!(test.store.get_identity(GUILD_ID, 100).await.unwrap().is_none());
}

/// Tests restoring a member who had no nickname override.
///
/// Expected: Restored with None, clearing the override on Discord
#[tokio::test]
async fn clears_nickname_when_none_was_set() {
    let test = TestEngine::new(true).await;
    test.join(CHANNEL_ID, member(100, None)).await;

    let outcome = test.leave(100).await;

    assert_eq!(outcome, Outcome::Restored { nickname: None });
    assert_eq!(test.members.calls()[1], call(100, None));
}

/// Tests leaving with restore disabled.
///
/// Expected: Skipped(RestoreDisabled) and the assigned nickname stays
#[tokio::test]
async fn keeps_nickname_when_restore_disabled() {
    let test = TestEngine::new(false).await;
    test.join(CHANNEL_ID, member(100, Some("Marco"))).await;

    let outcome = test.leave(100).await;

    assert_eq!(outcome, Outcome::Skipped(SkipReason::RestoreDisabled));
    assert_eq!(test.members.calls().len(), 1);
}

/// Tests leaving without a recorded join, e.g. after a restart of the memory store.
///
/// Expected: Skipped(NoPendingRestore) with no Discord call
#[tokio::test]
async fn skips_leave_without_pending_restore() {
    let test = TestEngine::new(true).await;

    let outcome = test.leave(100).await;

    assert_eq!(outcome, Outcome::Skipped(SkipReason::NoPendingRestore));
    assert!(test.members.calls().is_empty());
}

/// Tests that restores still happen after the guild was disabled.
///
/// Expected: Restored
#[tokio::test]
async fn restores_after_guild_disabled() {
    let test = TestEngine::new(true).await;
    test.join(CHANNEL_ID, member(100, Some("Marco"))).await;
    ServerSettingsService::new(test.store.as_ref())
        .set_enabled(GUILD_ID, false)
        .await
        .unwrap();

    let outcome = test.leave(100).await;

    assert_eq!(
        outcome,
        Outcome::Restored {
            nickname: Some("Marco".to_string())
        }
    );
}

/// Tests that disabling restore drops pending restores.
///
/// Verifies that a member who joined before restore was turned off keeps the
/// assigned nickname when they leave.
///
/// Expected: Skipped(RestoreDisabled) and no pending restore left
#[tokio::test]
async fn disabling_restore_clears_pending() {
    let test = TestEngine::new(true).await;
    test.join(CHANNEL_ID, member(100, Some("Marco"))).await;
    ServerSettingsService::new(test.store.as_ref())
        .set_restore(GUILD_ID, false)
        .await
        .unwrap();

    let outcome = test.leave(100).await;

    assert!(test.store.get_identity(GUILD_ID, 100).await.unwrap().is_none());
    assert_eq!(outcome, Outcome::Skipped(SkipReason::RestoreDisabled));
    assert_eq!(test.members.calls().len(), 1);
}

/// Tests a restore rejected by Discord.
///
/// Expected: RenameFailed and the pending restore removed anyway
#[tokio::test]
async fn failed_restore_drops_pending() {
    let err = RenameError::Transient("rate limited".to_string());
    let test = TestEngine::with_members(true, RecordingMemberApi::new()).await;
    test.join(CHANNEL_ID, member(100, Some("Marco"))).await;

    let failing = Arc::new(RecordingMemberApi::failing_always(err.clone()));
    let engine = IdentityEngine::new(test.store.clone(), failing.clone());
    let outcome = engine
        .handle(VoiceEvent::Left {
            guild_id: GUILD_ID,
            user_id: 100,
        })
        .await;

    assert_eq!(outcome, Outcome::RenameFailed(err));
    assert_eq!(failing.calls(), vec![call(100, Some("Marco"))]);
    assert!(test.store.get_identity(GUILD_ID, 100).await.unwrap().is_none());
}
