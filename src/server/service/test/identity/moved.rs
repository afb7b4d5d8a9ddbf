use super::*;

/// Tests moving between two regular channels.
///
/// Verifies that the nickname is re-rolled while the original from the first join
/// is kept for the restore.
///
/// Expected: Renamed twice and a later leave restores "Marco"
#[tokio::test]
async fn rerolls_and_keeps_original() {
    let test = TestEngine::new(true).await;
    test.join(CHANNEL_ID, member(100, Some("Marco"))).await;

    let outcome = test
        .move_to(CHANNEL_ID, OTHER_CHANNEL_ID, member(100, Some("Gino Panino")))
        .await;
    let left = test.leave(100).await;

    assert_eq!(outcome, renamed());
    assert_eq!(
        left,
        Outcome::Restored {
            nickname: Some("Marco".to_string())
        }
    );
    assert_eq!(test.rename_count().await, 2);
}

/// Tests moving into an excluded channel with restore enabled.
///
/// Expected: Restored with the original nickname
#[tokio::test]
async fn restores_when_moving_into_excluded() {
    let test = TestEngine::new(true).await;
    test.join(CHANNEL_ID, member(100, Some("Marco"))).await;

    let outcome = test
        .move_to(CHANNEL_ID, EXCLUDED_CHANNEL_ID, member(100, Some("Gino Panino")))
        .await;

    assert_eq!(
        outcome,
        Outcome::Restored {
            nickname: Some("Marco".to_string())
        }
    );
    assert!(test.store.get_identity(GUILD_ID, 100).await.unwrap().is_none());
}

/// Tests moving into an excluded channel with restore disabled.
///
/// Expected: Skipped(ExcludedChannel) with only the join rename sent
#[tokio::test]
async fn skips_excluded_when_restore_disabled() {
    let test = TestEngine::new(false).await;
    test.join(CHANNEL_ID, member(100, Some("Marco"))).await;

    let outcome = test
        .move_to(CHANNEL_ID, EXCLUDED_CHANNEL_ID, member(100, Some("Gino Panino")))
        .await;

    assert_eq!(outcome, Outcome::Skipped(SkipReason::ExcludedChannel));
    assert_eq!(test.members.calls().len(), 1);
}

/// Tests moving out of an excluded channel into a regular one.
///
/// Verifies that the nickname seen on the move becomes the original, since no
/// restore is pending.
///
/// Expected: Renamed with a pending restore holding "Marco"
#[tokio::test]
async fn renames_when_leaving_excluded() {
    let test = TestEngine::new(true).await;
    test.join(EXCLUDED_CHANNEL_ID, member(100, Some("Marco"))).await;

    let outcome = test
        .move_to(EXCLUDED_CHANNEL_ID, CHANNEL_ID, member(100, Some("Marco")))
        .await;

    assert_eq!(outcome, renamed());
    let identity = test.store.get_identity(GUILD_ID, 100).await.unwrap().unwrap();
    assert_eq!(identity.original_nickname, Some("Marco".to_string()));
}
