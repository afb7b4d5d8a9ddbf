//! Voice state handler.
//!
//! Translates raw voice state updates into [`VoiceEvent`]s for the dispatcher.
//! Updates that do not change the member's channel (mute, deafen, streaming) are
//! dropped here.

use serenity::all::{Context, GuildId, Member, UserId, VoiceState};
use tokio::sync::mpsc;

use crate::server::model::identity::{MemberSnapshot, VoiceEvent};

/// Channel change described by a voice state update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Joined { channel_id: u64 },
    Moved { from_channel_id: u64, to_channel_id: u64 },
    Left,
    Unchanged,
}

/// Classifies a voice state update by the channel before and after it.
pub fn classify(old_channel_id: Option<u64>, new_channel_id: Option<u64>) -> Transition {
    match (old_channel_id, new_channel_id) {
        (None, Some(channel_id)) => Transition::Joined { channel_id },
        (Some(from), Some(to)) if from != to => Transition::Moved {
            from_channel_id: from,
            to_channel_id: to,
        },
        (Some(_), None) => Transition::Left,
        _ => Transition::Unchanged,
    }
}

/// Captures the parts of a member the engine decides on.
pub fn snapshot_member(member: &Member, owner_id: Option<UserId>, bot_id: UserId) -> MemberSnapshot {
    let user_id = member.user.id;

    MemberSnapshot {
        user_id: user_id.get(),
        nickname: member.nick.clone(),
        display_name: member.display_name().to_string(),
        role_ids: member.roles.iter().map(|role_id| role_id.get()).collect(),
        is_guild_owner: owner_id == Some(user_id),
        is_bot_self: user_id == bot_id,
    }
}

pub async fn handle_voice_state_update(
    events: &mpsc::Sender<VoiceEvent>,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id else {
        return;
    };

    let old_channel_id = old
        .as_ref()
        .and_then(|state| state.channel_id)
        .map(|channel_id| channel_id.get());
    let new_channel_id = new.channel_id.map(|channel_id| channel_id.get());

    let event = match classify(old_channel_id, new_channel_id) {
        Transition::Unchanged => return,
        Transition::Left => VoiceEvent::Left {
            guild_id: guild_id.get(),
            user_id: new.user_id.get(),
        },
        Transition::Joined { channel_id } => {
            let Some(member) = member_snapshot(&ctx, guild_id, &new).await else {
                return;
            };
            VoiceEvent::Joined {
                guild_id: guild_id.get(),
                channel_id,
                member,
            }
        }
        Transition::Moved {
            from_channel_id,
            to_channel_id,
        } => {
            let Some(member) = member_snapshot(&ctx, guild_id, &new).await else {
                return;
            };
            VoiceEvent::Moved {
                guild_id: guild_id.get(),
                from_channel_id,
                to_channel_id,
                member,
            }
        }
    };

    if let Err(e) = events.send(event).await {
        tracing::error!("Voice event dispatcher is not running: {}", e);
    }
}

/// Builds the member snapshot, fetching the member when the update carries none.
async fn member_snapshot(
    ctx: &Context,
    guild_id: GuildId,
    state: &VoiceState,
) -> Option<MemberSnapshot> {
    let member = match &state.member {
        Some(member) => member.clone(),
        None => match guild_id.member(ctx, state.user_id).await {
            Ok(member) => member,
            Err(e) => {
                tracing::error!(
                    "Failed to fetch member {} of guild {}: {:?}",
                    state.user_id,
                    guild_id,
                    e
                );
                return None;
            }
        },
    };

    let owner_id = ctx.cache.guild(guild_id).map(|guild| guild.owner_id);
    let bot_id = ctx.cache.current_user().id;

    Some(snapshot_member(&member, owner_id, bot_id))
}
