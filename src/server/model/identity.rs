//! Voice events and the state kept between a join and the matching leave.

use chrono::{DateTime, Utc};

use crate::{
    model::member_nickname::{MemberNicknameDto, MemberNicknamePageDto},
    server::{
        error::{rename::RenameError, AppError},
        util::parse::parse_u64_from_string,
    },
};

/// Member state captured at the moment of a voice event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSnapshot {
    pub user_id: u64,
    /// Current guild nickname override, `None` when the member uses their account name.
    pub nickname: Option<String>,
    /// Name shown in the guild: the nickname override, else the global or user name.
    pub display_name: String,
    pub role_ids: Vec<u64>,
    pub is_guild_owner: bool,
    /// The member is this bot's own account.
    pub is_bot_self: bool,
}

/// Voice state transition of a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceEvent {
    /// Member connected to voice from no channel.
    Joined {
        guild_id: u64,
        channel_id: u64,
        member: MemberSnapshot,
    },
    /// Member switched from one voice channel to another.
    Moved {
        guild_id: u64,
        from_channel_id: u64,
        to_channel_id: u64,
        member: MemberSnapshot,
    },
    /// Member disconnected from voice.
    Left { guild_id: u64, user_id: u64 },
}

impl VoiceEvent {
    pub fn guild_id(&self) -> u64 {
        match self {
            Self::Joined { guild_id, .. }
            | Self::Moved { guild_id, .. }
            | Self::Left { guild_id, .. } => *guild_id,
        }
    }

    pub fn user_id(&self) -> u64 {
        match self {
            Self::Joined { member, .. } | Self::Moved { member, .. } => member.user_id,
            Self::Left { user_id, .. } => *user_id,
        }
    }
}

/// Pending restore of a renamed member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveIdentity {
    pub guild_id: u64,
    pub user_id: u64,
    /// Nickname override before the rename, `None` when there was none.
    pub original_nickname: Option<String>,
    /// Name shown before the rename, input of channel transformation rules.
    pub original_display_name: String,
    pub assigned_nickname: String,
    pub created_at: DateTime<Utc>,
}

impl ActiveIdentity {
    pub fn new(
        guild_id: u64,
        user_id: u64,
        original_nickname: Option<String>,
        original_display_name: String,
        assigned_nickname: String,
    ) -> Self {
        Self {
            guild_id,
            user_id,
            original_nickname,
            original_display_name,
            assigned_nickname,
            created_at: Utc::now(),
        }
    }

    pub fn from_entity(entity: entity::pending_restore::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            original_nickname: entity.original_nickname,
            original_display_name: entity.original_display_name,
            assigned_nickname: entity.assigned_nickname,
            created_at: entity.created_at,
        })
    }

    pub fn into_member_dto(self) -> MemberNicknameDto {
        MemberNicknameDto {
            user_id: self.user_id,
            display_name: self.original_display_name,
            reset_nickname: self.original_nickname,
            assigned_nickname: self.assigned_nickname,
            renamed_at: self.created_at,
        }
    }
}

/// One page of a guild's pending restores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityPage {
    pub identities: Vec<ActiveIdentity>,
    /// 1-based.
    pub page: u64,
    pub page_size: u64,
    /// Pending restores of the guild across all pages.
    pub total: u64,
}

impl IdentityPage {
    pub fn into_dto(self, stale_days: i64) -> MemberNicknamePageDto {
        MemberNicknamePageDto {
            members: self
                .identities
                .into_iter()
                .map(ActiveIdentity::into_member_dto)
                .collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            stale_days,
        }
    }
}

/// Why the engine did not rename a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    ExcludedChannel,
    /// Discord forbids renaming the guild owner, and the bot never renames itself.
    OwnerOrSelf,
    Immune,
    EmptyPool,
    RestoreDisabled,
    NoPendingRestore,
    /// Reading or writing configuration failed.
    StoreUnavailable,
}

/// Result of handling a single voice event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Renamed { nickname: String },
    Restored { nickname: Option<String> },
    Skipped(SkipReason),
    RenameFailed(RenameError),
}
