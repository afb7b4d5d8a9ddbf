use std::sync::Arc;

use crate::server::{
    error::rename::RenameError,
    model::{
        custom_channel::{ChannelRule, CustomChannel},
        identity::{MemberSnapshot, Outcome, SkipReason, VoiceEvent},
        nickname_pool::NicknamePool,
    },
    service::{
        identity::IdentityEngine,
        settings::ServerSettingsService,
        test::member::{NicknameCall, RecordingMemberApi},
    },
    store::{memory::MemoryStore, ConfigStore},
};

mod custom_channel;
mod join;
mod leave;
mod moved;
mod unavailable;

const GUILD_ID: u64 = 1;
const CHANNEL_ID: u64 = 10;
const OTHER_CHANNEL_ID: u64 = 11;
const EXCLUDED_CHANNEL_ID: u64 = 12;
const IMMUNITY_ROLE_ID: u64 = 50;

/// Engine over a memory store whose guild has a single-entry pool, so the
/// assigned nickname is predictable.
struct TestEngine {
    store: Arc<dyn ConfigStore>,
    members: Arc<RecordingMemberApi>,
    engine: IdentityEngine,
}

impl TestEngine {
    async fn new(restore_on_leave: bool) -> Self {
        Self::with_members(restore_on_leave, RecordingMemberApi::new()).await
    }

    async fn with_members(restore_on_leave: bool, members: RecordingMemberApi) -> Self {
        let store: Arc<dyn ConfigStore> = Arc::new(MemoryStore::new());
        let settings = ServerSettingsService::new(store.as_ref());
        settings.set_restore(GUILD_ID, restore_on_leave).await.unwrap();
        settings
            .set_immunity_role(GUILD_ID, Some(IMMUNITY_ROLE_ID))
            .await
            .unwrap();
        settings
            .add_excluded_channel(GUILD_ID, EXCLUDED_CHANNEL_ID)
            .await
            .unwrap();
        store
            .put_pool(&NicknamePool {
                guild_id: GUILD_ID,
                entries: vec!["Gino Panino".to_string()],
            })
            .await
            .unwrap();

        let members = Arc::new(members);
        let engine = IdentityEngine::new(store.clone(), members.clone());

        Self {
            store,
            members,
            engine,
        }
    }

    async fn join(&self, channel_id: u64, member: MemberSnapshot) -> Outcome {
        self.engine
            .handle(VoiceEvent::Joined {
                guild_id: GUILD_ID,
                channel_id,
                member,
            })
            .await
    }

    async fn move_to(&self, from_channel_id: u64, to_channel_id: u64, member: MemberSnapshot) -> Outcome {
        self.engine
            .handle(VoiceEvent::Moved {
                guild_id: GUILD_ID,
                from_channel_id,
                to_channel_id,
                member,
            })
            .await
    }

    async fn leave(&self, user_id: u64) -> Outcome {
        self.engine
            .handle(VoiceEvent::Left {
                guild_id: GUILD_ID,
                user_id,
            })
            .await
    }

    async fn with_rules(&self, channel_id: u64, rules: Vec<ChannelRule>) {
        self.store
            .put_custom_channel(&CustomChannel {
                guild_id: GUILD_ID,
                channel_id,
                name: "Funhouse".to_string(),
                rules,
            })
            .await
            .unwrap();
    }

    async fn rename_count(&self) -> u64 {
        self.store
            .get_settings(GUILD_ID)
            .await
            .unwrap()
            .unwrap()
            .rename_count
    }
}

fn member(user_id: u64, nickname: Option<&str>) -> MemberSnapshot {
    MemberSnapshot {
        user_id,
        nickname: nickname.map(str::to_string),
        display_name: nickname.unwrap_or("Luigi").to_string(),
        role_ids: Vec::new(),
        is_guild_owner: false,
        is_bot_self: false,
    }
}

fn call(user_id: u64, nickname: Option<&str>) -> NicknameCall {
    NicknameCall {
        guild_id: GUILD_ID,
        user_id,
        nickname: nickname.map(str::to_string),
    }
}

fn renamed() -> Outcome {
    Outcome::Renamed {
        nickname: "Gino Panino".to_string(),
    }
}
