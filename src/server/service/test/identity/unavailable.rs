use super::*;

use crate::server::service::test::store::ScriptedStore;

fn engine(members: Arc<RecordingMemberApi>) -> IdentityEngine {
    IdentityEngine::new(Arc::new(ScriptedStore::unavailable_for(GUILD_ID)), members)
}

/// Tests a join while the guild's configuration cannot be read.
///
/// Expected: Skipped(StoreUnavailable) and no nickname change
#[tokio::test]
async fn join_is_skipped_when_store_fails() {
    let members = Arc::new(RecordingMemberApi::new());

    let outcome = engine(members.clone())
        .handle(VoiceEvent::Joined {
            guild_id: GUILD_ID,
            channel_id: CHANNEL_ID,
            member: member(100, Some("Marco")),
        })
        .await;

    assert_eq!(outcome, Outcome::Skipped(SkipReason::StoreUnavailable));
    assert!(members.calls().is_empty());
}

/// Tests a leave while the guild's configuration cannot be read.
///
/// Expected: Skipped(StoreUnavailable) and no nickname change
#[tokio::test]
async fn leave_is_skipped_when_store_fails() {
    let members = Arc::new(RecordingMemberApi::new());

    let outcome = engine(members.clone())
        .handle(VoiceEvent::Left {
            guild_id: GUILD_ID,
            user_id: 100,
        })
        .await;

    assert_eq!(outcome, Outcome::Skipped(SkipReason::StoreUnavailable));
    assert!(members.calls().is_empty());
}

/// Tests a move while the guild's configuration cannot be read.
///
/// Expected: Skipped(StoreUnavailable) and no nickname change
#[tokio::test]
async fn move_is_skipped_when_store_fails() {
    let members = Arc::new(RecordingMemberApi::new());

    let outcome = engine(members.clone())
        .handle(VoiceEvent::Moved {
            guild_id: GUILD_ID,
            from_channel_id: CHANNEL_ID,
            to_channel_id: OTHER_CHANNEL_ID,
            member: member(100, Some("Marco")),
        })
        .await;

    assert_eq!(outcome, Outcome::Skipped(SkipReason::StoreUnavailable));
    assert!(members.calls().is_empty());
}
