use super::*;

/// Tests joining a channel with transformation rules.
///
/// Verifies that the member's display name is transformed instead of drawing from the
/// pool and that the display name is kept with the pending restore.
///
/// Expected: Renamed to "oiraM" and counted once
#[tokio::test]
async fn join_transforms_display_name() {
    let test = TestEngine::new(true).await;
    test.with_rules(CHANNEL_ID, vec![ChannelRule::Reverse]).await;

    let outcome = test.join(CHANNEL_ID, member(100, Some("Mario"))).await;

    assert_eq!(
        outcome,
        Outcome::Renamed {
            nickname: "oiraM".to_string()
        }
    );
    assert_eq!(test.members.calls(), vec![call(100, Some("oiraM"))]);
    let identity = test.store.get_identity(GUILD_ID, 100).await.unwrap().unwrap();
    assert_eq!(identity.original_display_name, "Mario");
    assert_eq!(identity.assigned_nickname, "oiraM");
    assert_eq!(test.rename_count().await, 1);
}

/// Tests moving between two rule channels.
///
/// Verifies that the second transformation starts from the name recorded at join,
/// not from the already transformed nickname.
///
/// Expected: Renamed to "M4r10" and a later leave restores "Mario"
#[tokio::test]
async fn move_transforms_original_display_name() {
    let test = TestEngine::new(true).await;
    test.with_rules(CHANNEL_ID, vec![ChannelRule::Reverse]).await;
    test.with_rules(OTHER_CHANNEL_ID, vec![ChannelRule::Leetspeak])
        .await;
    test.join(CHANNEL_ID, member(100, Some("Mario"))).await;

    let outcome = test
        .move_to(CHANNEL_ID, OTHER_CHANNEL_ID, member(100, Some("oiraM")))
        .await;
    let left = test.leave(100).await;

    assert_eq!(
        outcome,
        Outcome::Renamed {
            nickname: "M4r10".to_string()
        }
    );
    assert_eq!(
        left,
        Outcome::Restored {
            nickname: Some("Mario".to_string())
        }
    );
}

/// Tests moving from a rule channel into a regular one.
///
/// Expected: the pool nickname is assigned
#[tokio::test]
async fn move_to_regular_channel_draws_from_pool() {
    let test = TestEngine::new(true).await;
    test.with_rules(CHANNEL_ID, vec![ChannelRule::Uppercase]).await;
    test.join(CHANNEL_ID, member(100, Some("Mario"))).await;

    let outcome = test
        .move_to(CHANNEL_ID, OTHER_CHANNEL_ID, member(100, Some("MARIO")))
        .await;

    assert_eq!(outcome, renamed());
}

/// Tests a custom channel whose rule list is empty.
///
/// Expected: the pool nickname is assigned
#[tokio::test]
async fn empty_rules_fall_back_to_pool() {
    let test = TestEngine::new(false).await;
    test.with_rules(CHANNEL_ID, Vec::new()).await;

    let outcome = test.join(CHANNEL_ID, member(100, Some("Mario"))).await;

    assert_eq!(outcome, renamed());
}

/// Tests rules in a guild whose pool is empty.
///
/// Expected: Renamed, since rules do not need the pool
#[tokio::test]
async fn rules_do_not_need_pool() {
    let test = TestEngine::new(false).await;
    test.store
        .put_pool(&NicknamePool {
            guild_id: GUILD_ID,
            entries: Vec::new(),
        })
        .await
        .unwrap();
    test.with_rules(
        CHANNEL_ID,
        vec![ChannelRule::Prefix {
            value: "Sir".to_string(),
        }],
    )
    .await;

    let outcome = test.join(CHANNEL_ID, member(100, None)).await;

    assert_eq!(
        outcome,
        Outcome::Renamed {
            nickname: "Sir Luigi".to_string()
        }
    );
}

/// Tests rules on a channel that is also excluded.
///
/// Expected: Skipped(ExcludedChannel) with no call, exclusion wins
#[tokio::test]
async fn excluded_channel_ignores_rules() {
    let test = TestEngine::new(true).await;
    test.with_rules(EXCLUDED_CHANNEL_ID, vec![ChannelRule::Reverse])
        .await;

    let outcome = test
        .join(EXCLUDED_CHANNEL_ID, member(100, Some("Mario")))
        .await;

    assert_eq!(outcome, Outcome::Skipped(SkipReason::ExcludedChannel));
    assert!(test.members.calls().is_empty());
}
