//! Per-guild configuration.

use std::collections::BTreeSet;

use crate::{
    model::settings::{GuildSettingsDto, GuildStatsDto, GuildSummaryDto},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::{parse_optional_u64_from_string, parse_u64_from_string},
    },
};

/// Configuration of a single guild.
///
/// `rename_count` is read-only from the perspective of `ConfigStore::put_settings`;
/// it only ever changes through `ConfigStore::increment_rename_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub guild_id: u64,
    /// Last known guild name, display only.
    pub name: String,
    /// Master switch, when false voice events are ignored.
    pub enabled: bool,
    pub restore_on_leave: bool,
    /// Members holding this role are never renamed.
    pub immunity_role_id: Option<u64>,
    /// Voice channels in which joins never trigger a rename.
    pub excluded_channel_ids: BTreeSet<u64>,
    /// Number of successful renames performed in this guild.
    pub rename_count: u64,
}

impl ServerSettings {
    /// Settings for a guild seen for the first time.
    pub fn new(guild_id: u64) -> Self {
        Self {
            guild_id,
            name: String::new(),
            enabled: true,
            restore_on_leave: false,
            immunity_role_id: None,
            excluded_channel_ids: BTreeSet::new(),
            rename_count: 0,
        }
    }

    pub fn is_excluded(&self, channel_id: u64) -> bool {
        self.excluded_channel_ids.contains(&channel_id)
    }

    /// Whether any of the member's roles grants immunity.
    pub fn is_immune(&self, role_ids: &[u64]) -> bool {
        self.immunity_role_id
            .is_some_and(|immunity_role_id| role_ids.contains(&immunity_role_id))
    }

    pub fn into_dto(self) -> GuildSettingsDto {
        GuildSettingsDto {
            guild_id: self.guild_id,
            name: self.name,
            enabled: self.enabled,
            restore_on_leave: self.restore_on_leave,
            immunity_role_id: self.immunity_role_id,
            excluded_channel_ids: self.excluded_channel_ids.into_iter().collect(),
            rename_count: self.rename_count,
        }
    }

    pub fn into_stats_dto(self) -> GuildStatsDto {
        GuildStatsDto {
            guild_id: self.guild_id,
            rename_count: self.rename_count,
        }
    }

    pub fn into_summary_dto(self) -> GuildSummaryDto {
        GuildSummaryDto {
            guild_id: self.guild_id,
            name: self.name,
            enabled: self.enabled,
        }
    }

    /// Converts the settings row and its excluded channel rows at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ServerSettings)` - The converted settings
    /// - `Err(AppError::InternalErr(_))` - A stored ID failed to parse or the counter
    ///   is negative
    pub fn from_entity(
        entity: entity::guild_settings::Model,
        excluded_channels: Vec<entity::excluded_channel::Model>,
    ) -> Result<Self, AppError> {
        let excluded_channel_ids = excluded_channels
            .into_iter()
            .map(|channel| parse_u64_from_string(channel.channel_id))
            .collect::<Result<BTreeSet<u64>, AppError>>()?;

        let rename_count = u64::try_from(entity.rename_count)
            .map_err(|_| InternalError::NegativeRenameCount(entity.rename_count))?;

        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            name: entity.name,
            enabled: entity.enabled,
            restore_on_leave: entity.restore_on_leave,
            immunity_role_id: parse_optional_u64_from_string(entity.immunity_role_id)?,
            excluded_channel_ids,
            rename_count,
        })
    }
}

/// Full replacement of the dashboard-editable settings.
#[derive(Debug, Clone)]
pub struct UpdateSettingsParam {
    pub enabled: bool,
    pub restore_on_leave: bool,
    pub immunity_role_id: Option<u64>,
}

impl UpdateSettingsParam {
    pub fn from_dto(dto: crate::model::settings::UpdateGuildSettingsDto) -> Self {
        Self {
            enabled: dto.enabled,
            restore_on_leave: dto.restore_on_leave,
            immunity_role_id: dto.immunity_role_id,
        }
    }
}
